//! In-memory class schema registry

use crate::model::{ClassSchema, TypeDescriptor};
use crate::resolver::TypeResolver;
use std::collections::HashMap;
use tracing::debug;

/// Registry of class schemas, queried by the mapper as its type resolver
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    classes: HashMap<String, ClassSchema>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Register a class schema, replacing any schema of the same name
    pub fn register(&mut self, schema: ClassSchema) {
        debug!(
            class = %schema.name,
            properties = schema.properties.len(),
            "Registering class schema"
        );
        self.classes.insert(schema.name.clone(), schema);
    }

    /// Register a class schema, builder style
    #[must_use]
    pub fn with_class(mut self, schema: ClassSchema) -> Self {
        self.register(schema);
        self
    }

    /// Get a class schema by name
    pub fn get(&self, class: &str) -> Option<&ClassSchema> {
        self.classes.get(class)
    }

    /// Check if a class is registered
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Registered class names, sorted
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Merge another registry into this one; later schemas win
    pub fn extend(&mut self, other: SchemaRegistry) {
        for (_, schema) in other.classes {
            self.register(schema);
        }
    }
}

impl TypeResolver for SchemaRegistry {
    fn properties_of(&self, class: &str) -> Option<Vec<String>> {
        self.get(class).map(ClassSchema::property_names)
    }

    fn type_of(&self, class: &str, property: &str) -> Option<TypeDescriptor> {
        self.get(class)?
            .find_property(property)?
            .primary_type()
            .cloned()
    }

    fn is_known(&self, class: &str) -> bool {
        self.contains(class)
    }
}
