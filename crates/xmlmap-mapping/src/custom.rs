//! Custom type registry
//!
//! Maps a class identifier to a conversion function that builds the value
//! directly from a node, bypassing generic object mapping.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use xmlmap_ir::{Node, Value};

/// Type alias for a custom conversion function
pub type ConverterFn = Arc<dyn Fn(&Node) -> crate::Result<Value> + Send + Sync>;

/// Registry of custom conversion functions keyed by class identifier
///
/// Append/overwrite only: there is no removal.
#[derive(Default, Clone)]
pub struct CustomTypeRegistry {
    types: HashMap<String, ConverterFn>,
}

impl CustomTypeRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register or overwrite the conversion function for a type
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        func: impl Fn(&Node) -> crate::Result<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        let type_name = type_name.into();
        debug!(type_name = %type_name, "Registering custom type");
        self.types.insert(type_name, Arc::new(func));
        self
    }

    /// Get the conversion function for a type
    #[must_use]
    pub fn lookup(&self, type_name: &str) -> Option<ConverterFn> {
        self.types.get(type_name).cloned()
    }

    /// Check if a type has a custom conversion
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Get list of registered type names, sorted
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl std::fmt::Debug for CustomTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomTypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

/// Conversion function parsing node text as a date-time in `format`
///
/// `format` uses chrono's strftime syntax, e.g. `%Y-%m-%d %H:%M:%S`.
pub fn datetime_format(
    type_name: impl Into<String>,
    format: impl Into<String>,
) -> impl Fn(&Node) -> crate::Result<Value> + Send + Sync + 'static {
    let type_name = type_name.into();
    let format = format.into();
    move |node: &Node| {
        NaiveDateTime::parse_from_str(node.text.trim(), &format)
            .map(Value::DateTime)
            .map_err(|e| {
                crate::Error::custom(
                    &type_name,
                    format!("cannot parse [{}] with '{}': {e}", node.text, format),
                )
            })
    }
}

/// Conversion function parsing node text as a calendar date in `format`
pub fn date_format(
    type_name: impl Into<String>,
    format: impl Into<String>,
) -> impl Fn(&Node) -> crate::Result<Value> + Send + Sync + 'static {
    let type_name = type_name.into();
    let format = format.into();
    move |node: &Node| {
        NaiveDate::parse_from_str(node.text.trim(), &format)
            .map(Value::Date)
            .map_err(|e| {
                crate::Error::custom(
                    &type_name,
                    format!("cannot parse [{}] with '{}': {e}", node.text, format),
                )
            })
    }
}
