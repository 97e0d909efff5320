//! # xmlmap-xml
//!
//! Builds [`Node`] trees from XML text.
//!
//! Only elements and their text are kept: attributes, namespaces, comments
//! and processing instructions are dropped. Element names are local names.
//! Text made only of whitespace is discarded; any other text is kept
//! verbatim, with entity and character references resolved and CDATA
//! sections inlined.

pub mod reader;

pub use reader::{parse_reader, parse_str};
pub use xmlmap_ir::Node;

use thiserror::Error;

/// Errors that can occur while building a tree from XML
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("Invalid UTF-8 in XML: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("XML document has no root element")]
    Empty,

    #[error("Unbalanced XML: expected </{expected}>, found {found}")]
    Unbalanced { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
