//! # xmlmap-mapping
//!
//! Type-directed mapping engine for node trees.
//!
//! [`XmlMapper`] walks a [`Node`](xmlmap_ir::Node) tree and rebuilds it as an
//! object graph, letting each target class's declared property types decide
//! how text is coerced and where to recurse. Types that need bespoke
//! construction (timestamps, for example) are handled by conversion
//! functions registered in a [`CustomTypeRegistry`].

pub mod coerce;
pub mod config;
pub mod custom;
pub mod extract;
pub mod mapper;
pub mod naming;

pub use config::{MapperConfig, NumericPolicy};
pub use custom::{ConverterFn, CustomTypeRegistry};
pub use extract::from_object;
pub use mapper::XmlMapper;
pub use naming::{CamelCaseConverter, IdentityConverter, NameConverter};

use thiserror::Error;
use xmlmap_schema::PrimitiveKind;

/// Errors that can occur during mapping
#[derive(Error, Debug)]
pub enum Error {
    #[error("Class [{class}] does not exist")]
    UnknownType { class: String },

    #[error("Could not convert [{text}] to boolean")]
    InvalidBooleanLiteral { text: String },

    #[error("Could not convert [{text}] to {kind}")]
    InvalidNumber { kind: PrimitiveKind, text: String },

    #[error("Custom type {type_name} failed: {message}")]
    Custom { type_name: String, message: String },

    #[error(transparent)]
    Ir(#[from] xmlmap_ir::Error),

    #[error("Typed extraction failed: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an error for a failing custom conversion function.
    pub fn custom(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
