//! Mapping engine
//!
//! Rebuilds object graphs from node trees, driven by the declared property
//! types of the target classes.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use xmlmap_ir::{Node, Object, Value};
use xmlmap_schema::{PrimitiveKind, TypeDescriptor, TypeResolver};

use crate::coerce;
use crate::config::MapperConfig;
use crate::custom::CustomTypeRegistry;
use crate::extract::from_object;
use crate::naming::{CamelCaseConverter, NameConverter};
use crate::{Error, Result};

/// Type-directed node tree mapper
///
/// Configure it (custom types, name converter) before mapping; mapping
/// itself only reads the mapper, so one instance can serve many threads.
pub struct XmlMapper<R> {
    /// Source of property names and declared types
    resolver: R,

    /// Node name to property name strategy
    name_converter: Box<dyn NameConverter>,

    /// Conversion functions for types needing bespoke construction
    types: CustomTypeRegistry,

    config: MapperConfig,
}

impl<R: TypeResolver> XmlMapper<R> {
    /// Create a mapper with the default configuration
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, MapperConfig::default())
    }

    /// Create a mapper with an explicit configuration
    pub fn with_config(resolver: R, config: MapperConfig) -> Self {
        Self {
            resolver,
            name_converter: Box::new(CamelCaseConverter),
            types: CustomTypeRegistry::new(),
            config,
        }
    }

    /// Replace the name converter
    #[must_use]
    pub fn with_name_converter(mut self, converter: impl NameConverter + 'static) -> Self {
        self.name_converter = Box::new(converter);
        self
    }

    /// Replace the custom type registry
    #[must_use]
    pub fn with_custom_types(mut self, types: CustomTypeRegistry) -> Self {
        self.types = types;
        self
    }

    /// Add a custom type
    pub fn add_type(
        &mut self,
        type_name: impl Into<String>,
        func: impl Fn(&Node) -> Result<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.types.register(type_name, func);
        self
    }

    pub fn custom_types(&self) -> &CustomTypeRegistry {
        &self.types
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Map a node to a new instance of `class`
    ///
    /// Children whose converted name is not a declared property are skipped.
    /// Any conversion failure aborts the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] when the resolver does not know `class`,
    /// or the first error raised while converting a property value.
    pub fn map(&self, node: &Node, class: &str) -> Result<Object> {
        let properties = self
            .resolver
            .properties_of(class)
            .ok_or_else(|| Error::UnknownType {
                class: class.to_string(),
            })?;

        debug!(class, node = %node.name, children = node.children.len(), "Mapping node");
        let mut entity = Object::new(class, properties);

        for child in &node.children {
            let name = self.name_converter.convert(&child.name);

            if !entity.contains(&name) {
                trace!(class, node = %child.name, property = %name, "Skipping unmatched node");
                continue;
            }

            let ty = self.property_type(class, &name);
            let value = self.map_value(child, &ty)?;
            entity.set(&name, value)?;
        }

        Ok(entity)
    }

    /// Map a node and deserialize the result into `T`
    ///
    /// # Errors
    ///
    /// Fails like [`XmlMapper::map`], or with [`Error::Extraction`] when the
    /// mapped object does not fit `T`.
    pub fn map_into<T: DeserializeOwned>(&self, node: &Node, class: &str) -> Result<T> {
        let object = self.map(node, class)?;
        from_object(&object)
    }

    /// Convert a node according to a type descriptor
    ///
    /// # Errors
    ///
    /// Returns the first conversion error encountered.
    pub fn map_value(&self, node: &Node, ty: &TypeDescriptor) -> Result<Value> {
        match ty {
            TypeDescriptor::Collection(element) => {
                let element = element.as_deref().unwrap_or(&self.config.default_type);
                self.as_collection(node, element)
            }
            TypeDescriptor::Object(class) => self.as_object(node, class),
            TypeDescriptor::Primitive(PrimitiveKind::Boolean) => {
                coerce::to_boolean(self.text_of(node)).map(Value::Boolean)
            }
            TypeDescriptor::Primitive(PrimitiveKind::String) => {
                Ok(Value::String(self.text_of(node).to_string()))
            }
            // numeric coercion trims regardless of `trim_text`
            TypeDescriptor::Primitive(kind) => {
                coerce::to_primitive(self.text_of(node), *kind, self.config.numeric_policy)
            }
        }
    }

    /// Declared type of a property, or the default type when undeclared
    fn property_type(&self, class: &str, property: &str) -> TypeDescriptor {
        self.resolver.type_of(class, property).unwrap_or_else(|| {
            trace!(class, property, default = %self.config.default_type, "Using default type");
            self.config.default_type.clone()
        })
    }

    fn as_collection(&self, node: &Node, element: &TypeDescriptor) -> Result<Value> {
        node.children
            .iter()
            .map(|child| self.map_value(child, element))
            .collect::<Result<Vec<_>>>()
            .map(Value::List)
    }

    fn as_object(&self, node: &Node, class: &str) -> Result<Value> {
        if let Some(func) = self.types.lookup(class) {
            trace!(class, node = %node.name, "Calling custom type conversion");
            return func(node);
        }

        self.map(node, class).map(Value::Object)
    }

    fn text_of<'a>(&self, node: &'a Node) -> &'a str {
        if self.config.trim_text {
            node.text.trim()
        } else {
            &node.text
        }
    }
}

impl<R> std::fmt::Debug for XmlMapper<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlMapper")
            .field("custom_types", &self.types)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
