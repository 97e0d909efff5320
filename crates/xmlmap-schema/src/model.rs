//! Schema model definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::expression::parse_candidates;
use crate::{Error, Result};

/// Scalar kinds a node's text can be coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl PrimitiveKind {
    /// Canonical type-expression keyword
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Boolean => "bool",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Declared type of a property
///
/// Serialized as a type expression such as `int`, `Option[]` or `array`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    /// Scalar coerced from text
    Primitive(PrimitiveKind),

    /// Nested class, identified by name
    Object(String),

    /// Sequence of elements; `None` means the element type is unspecified
    Collection(Option<Box<TypeDescriptor>>),
}

impl TypeDescriptor {
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        Self::Primitive(PrimitiveKind::Integer)
    }

    pub fn float() -> Self {
        Self::Primitive(PrimitiveKind::Float)
    }

    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    pub fn object(class: impl Into<String>) -> Self {
        Self::Object(class.into())
    }

    /// Collection with a declared element type
    pub fn collection_of(element: TypeDescriptor) -> Self {
        Self::Collection(Some(Box::new(element)))
    }

    /// Collection whose element type falls back to the mapper default
    pub fn untyped_collection() -> Self {
        Self::Collection(None)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Class identifier for object types
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Object(class) => Some(class),
            _ => None,
        }
    }

    /// Declared element type for collections
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Collection(element) => element.as_deref(),
            _ => None,
        }
    }
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Object(class) => f.write_str(class),
            Self::Collection(None) => f.write_str("array"),
            Self::Collection(Some(element)) => write!(f, "{element}[]"),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = Error;

    /// Parse a type expression, keeping the first non-null candidate
    fn from_str(expression: &str) -> Result<Self> {
        parse_candidates(expression)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_type(expression, "no non-null type"))
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = Error;

    fn try_from(expression: String) -> Result<Self> {
        expression.parse()
    }
}

impl From<TypeDescriptor> for String {
    fn from(descriptor: TypeDescriptor) -> Self {
        descriptor.to_string()
    }
}

/// Definition of a single class property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,

    /// Declared candidates in declaration order; empty when undeclared
    pub types: Vec<TypeDescriptor>,
}

impl PropertyDefinition {
    /// Property with a single declared type
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            types: vec![ty],
        }
    }

    /// Property with no declared type
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Property typed by an expression such as `?int` or `Option[]|null`
    pub fn parse(name: impl Into<String>, expression: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            types: parse_candidates(expression)?,
        })
    }

    /// First declared candidate, if any
    pub fn primary_type(&self) -> Option<&TypeDescriptor> {
        self.types.first()
    }
}

/// Property layout of a target class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchema {
    pub name: String,
    pub properties: Vec<PropertyDefinition>,
}

impl ClassSchema {
    /// Create a class with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a typed property, builder style
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.properties.push(PropertyDefinition::new(name, ty));
        self
    }

    /// Add a property with no declared type, builder style
    #[must_use]
    pub fn untyped_property(mut self, name: impl Into<String>) -> Self {
        self.properties.push(PropertyDefinition::untyped(name));
        self
    }

    /// Add a property definition, rejecting duplicates
    pub fn add_property(&mut self, property: PropertyDefinition) -> Result<()> {
        if self.find_property(&property.name).is_some() {
            return Err(Error::DuplicateProperty {
                class: self.name.clone(),
                property: property.name,
            });
        }
        self.properties.push(property);
        Ok(())
    }

    /// Look up a property by name
    pub fn find_property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Property names in declaration order
    pub fn property_names(&self) -> Vec<String> {
        self.properties.iter().map(|p| p.name.clone()).collect()
    }
}
