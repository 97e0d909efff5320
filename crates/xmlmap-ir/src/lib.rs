#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # xmlmap-ir
//!
//! Tree and value structures shared by the XML object mapper.
//!
//! The input side is a [`Node`] tree: named elements carrying text and an
//! ordered list of children, as produced by any hierarchical parser. The
//! output side is a [`Value`] graph whose objects are [`Object`] instances
//! of a named class.

/// Source tree nodes consumed by the mapper.
pub mod node;
/// Mapped values and target object instances.
pub mod value;

/// Node primitive for the input tree.
pub use node::Node;
/// Output value model.
pub use value::{Object, Value};

use thiserror::Error;

/// Errors that can occur when working with the IR
#[derive(Error, Debug)]
pub enum Error {
    #[error("Class '{class}' does not declare property '{property}'")]
    PropertyNotDeclared { class: String, property: String },
}

impl Error {
    /// Build a property-not-declared error for the given class.
    pub fn property_not_declared(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotDeclared {
            class: class.into(),
            property: property.into(),
        }
    }
}

/// Crate-local result type for IR operations.
pub type Result<T> = std::result::Result<T, Error>;
