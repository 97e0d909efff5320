//! Class schema loader for YAML and JSON files

use crate::expression::parse_candidates;
use crate::model::{ClassSchema, PropertyDefinition};
use crate::registry::SchemaRegistry;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Serializable schema format for loading from files
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    classes: ClassesFile,
}

/// Classes as a list of `{name, properties}` entries, or a `Name: properties` map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassesFile {
    List(Vec<ClassFile>),
    Map(IndexMap<String, Option<PropertiesFile>>),
}

impl Default for ClassesFile {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct ClassFile {
    name: String,
    #[serde(default)]
    properties: PropertiesFile,
}

/// Properties as a list of `{name, type}` entries, or a `name: type` map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertiesFile {
    List(Vec<PropertyFile>),
    Map(IndexMap<String, Option<String>>),
}

impl Default for PropertiesFile {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
struct PropertyFile {
    name: String,
    #[serde(default, rename = "type")]
    ty: Option<String>,
}

/// Loads class schemas from disk or strings
pub struct SchemaLoader {
    schema_paths: Vec<PathBuf>,
}

impl SchemaLoader {
    /// Create a new schema loader with the given search paths
    pub fn new(schema_paths: Vec<PathBuf>) -> Self {
        Self { schema_paths }
    }

    /// Load a schema file by base name from the search paths
    ///
    /// Tries `<name>.yaml`, `<name>.yml` and `<name>.json` in each path.
    pub fn load(&self, name: &str) -> Result<SchemaRegistry> {
        let variations = [
            format!("{name}.yaml"),
            format!("{name}.yml"),
            format!("{name}.json"),
        ];

        for path in &self.schema_paths {
            for variation in &variations {
                let file_path = path.join(variation);
                if file_path.exists() {
                    trace!("Found schema file: {:?}", file_path);
                    return self.load_from_file(&file_path);
                }
            }
        }

        Err(Error::NotFound(format!(
            "Schema {} not found in search paths: {:?}",
            name, self.schema_paths
        )))
    }

    /// Load a schema from a specific file path
    pub fn load_from_file(&self, path: &Path) -> Result<SchemaRegistry> {
        trace!("Loading schema from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;

        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            self.load_from_yaml(&content)
        } else {
            self.load_from_json(&content)
        }
    }

    /// Load a schema from JSON string
    pub fn load_from_json(&self, json: &str) -> Result<SchemaRegistry> {
        let schema_file: SchemaFile = serde_json::from_str(json)
            .map_err(|e| Error::InvalidFormat(format!("JSON parse error: {e}")))?;

        self.convert_schema_file(schema_file)
    }

    /// Load a schema from YAML string
    pub fn load_from_yaml(&self, yaml: &str) -> Result<SchemaRegistry> {
        let schema_file: SchemaFile = serde_yaml::from_str(yaml)
            .map_err(|e| Error::InvalidFormat(format!("YAML parse error: {e}")))?;

        self.convert_schema_file(schema_file)
    }

    /// Convert a SchemaFile to a registry, parsing every type expression
    fn convert_schema_file(&self, schema_file: SchemaFile) -> Result<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();

        let classes: Vec<(String, PropertiesFile)> = match schema_file.classes {
            ClassesFile::List(list) => list.into_iter().map(|c| (c.name, c.properties)).collect(),
            ClassesFile::Map(map) => map
                .into_iter()
                .map(|(name, properties)| (name, properties.unwrap_or_default()))
                .collect(),
        };

        for (class_name, properties) in classes {
            if registry.contains(&class_name) {
                return Err(Error::InvalidFormat(format!(
                    "class '{class_name}' defined twice"
                )));
            }

            // entries keep file order
            let entries: Vec<(String, Option<String>)> = match properties {
                PropertiesFile::List(list) => list.into_iter().map(|p| (p.name, p.ty)).collect(),
                PropertiesFile::Map(map) => map.into_iter().collect(),
            };

            let mut schema = ClassSchema::new(class_name);
            for (name, ty) in entries {
                let property = match ty {
                    Some(expression) => PropertyDefinition {
                        types: parse_candidates(&expression)?,
                        name,
                    },
                    None => PropertyDefinition::untyped(name),
                };
                schema.add_property(property)?;
            }

            debug!(class = %schema.name, "Loaded class schema");
            registry.register(schema);
        }

        Ok(registry)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDescriptor;
    use crate::resolver::TypeResolver;

    const CAR_YAML: &str = r#"
classes:
  - name: Car
    properties:
      - name: model
        type: string
      - name: year
        type: int
      - name: options
        type: "Option[]"
      - name: colours
        type: array
      - name: notes
  - name: Option
    properties:
      name: string
"#;

    #[test]
    fn test_load_from_yaml_list_and_map_forms() {
        let registry = SchemaLoader::default().load_from_yaml(CAR_YAML).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.properties_of("Car").unwrap(),
            vec!["model", "year", "options", "colours", "notes"]
        );
        assert_eq!(
            registry.type_of("Car", "options"),
            Some(TypeDescriptor::collection_of(TypeDescriptor::object("Option")))
        );
        assert_eq!(
            registry.type_of("Car", "colours"),
            Some(TypeDescriptor::untyped_collection())
        );
        assert!(registry.type_of("Car", "notes").is_none());
        assert_eq!(registry.type_of("Option", "name"), Some(TypeDescriptor::string()));
    }

    #[test]
    fn test_load_from_yaml_class_map_form() {
        let yaml = "classes:\n  Car:\n    model: string\n    options: \"Option[]\"\n  Option:\n    name: string\n  Empty:\n";
        let registry = SchemaLoader::default().load_from_yaml(yaml).unwrap();

        assert_eq!(registry.class_names(), vec!["Car", "Empty", "Option"]);
        assert_eq!(registry.properties_of("Car").unwrap(), vec!["model", "options"]);
        assert_eq!(
            registry.type_of("Car", "options"),
            Some(TypeDescriptor::collection_of(TypeDescriptor::object("Option")))
        );
        assert_eq!(registry.properties_of("Empty").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_map_form_properties_keep_file_order() {
        let yaml = "classes:\n  - name: Car\n    properties:\n      year: int\n      model: string\n      awd: bool\n";
        let registry = SchemaLoader::default().load_from_yaml(yaml).unwrap();
        assert_eq!(registry.properties_of("Car").unwrap(), vec!["year", "model", "awd"]);

        let json = r#"{"classes":{"Car":{"year":"int","model":"string","awd":"bool"}}}"#;
        let registry = SchemaLoader::default().load_from_json(json).unwrap();
        assert_eq!(registry.properties_of("Car").unwrap(), vec!["year", "model", "awd"]);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{"classes":[{"name":"Option","properties":[{"name":"name","type":"?string"}]}]}"#;
        let registry = SchemaLoader::default().load_from_json(json).unwrap();
        assert_eq!(registry.type_of("Option", "name"), Some(TypeDescriptor::string()));
    }

    #[test]
    fn test_invalid_type_expression_fails() {
        let yaml = "classes:\n  - name: Car\n    properties:\n      year: \"int|\"\n";
        let err = SchemaLoader::default().load_from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidType { .. }));
    }

    #[test]
    fn test_duplicate_class_fails() {
        let yaml = "classes:\n  - name: Car\n  - name: Car\n";
        let err = SchemaLoader::default().load_from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("defined twice"));
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let err = SchemaLoader::default()
            .load_from_yaml("classes: [unclosed")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_missing_schema_in_search_paths() {
        let loader = SchemaLoader::new(vec![PathBuf::from("/nonexistent/schemas")]);
        let err = loader.load("vehicles").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
