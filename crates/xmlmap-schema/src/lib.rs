//! # xmlmap-schema
//!
//! Type descriptors, class schemas, and type resolution for the XML object mapper.
//!
//! Class schemas stand in for runtime reflection: each target class is
//! registered with its property names and declared types, either in code or
//! loaded from YAML/JSON files, and the mapper queries them through the
//! [`TypeResolver`] trait.

pub mod expression;
pub mod loader;
pub mod model;
pub mod registry;
pub mod resolver;

pub use expression::parse_candidates;
pub use loader::SchemaLoader;
pub use model::{ClassSchema, PrimitiveKind, PropertyDefinition, TypeDescriptor};
pub use registry::SchemaRegistry;
pub use resolver::TypeResolver;

use thiserror::Error;

/// Errors that can occur when working with schemas
#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Invalid type expression '{expression}': {reason}")]
    InvalidType { expression: String, reason: String },

    #[error("Invalid schema format: {0}")]
    InvalidFormat(String),

    #[error("Property '{property}' declared twice on class '{class}'")]
    DuplicateProperty { class: String, property: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an invalid-type error for a type expression.
    pub fn invalid_type(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
