//! Mapper configuration

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use xmlmap_schema::TypeDescriptor;

/// Policy for numeric text that does not parse cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Fail the mapping with an invalid-number error
    Strict,

    /// Use the longest numeric prefix, or zero when there is none
    Lenient,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

/// Engine configuration, fixed before any mapping starts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Type used when a property has no declared type, and for collections
    /// that do not declare an element type
    pub default_type: TypeDescriptor,

    pub numeric_policy: NumericPolicy,

    /// Trim string and boolean text before coercion
    pub trim_text: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_type: TypeDescriptor::string(),
            numeric_policy: NumericPolicy::default(),
            trim_text: false,
        }
    }
}

impl MapperConfig {
    #[must_use]
    pub fn with_default_type(mut self, default_type: TypeDescriptor) -> Self {
        self.default_type = default_type;
        self
    }

    #[must_use]
    pub fn with_numeric_policy(mut self, numeric_policy: NumericPolicy) -> Self {
        self.numeric_policy = numeric_policy;
        self
    }

    #[must_use]
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(format!("YAML parse error: {e}")))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("JSON parse error: {e}")))
    }

    /// Load configuration from a file, picking the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {e}", path.display())))?;

        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }
}
