//! Mapped values and target instances
#![allow(clippy::must_use_candidate)] // Accessor API intentionally omits pervasive #[must_use].

use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Values produced by mapping a node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Declared but never assigned
    Null,

    /// String value
    String(String),

    /// Integer value
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Boolean value
    Boolean(bool),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without zone
    DateTime(NaiveDateTime),

    /// Ordered collection
    List(Vec<Value>),

    /// Nested object instance
    Object(Object),
}

impl Value {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

/// An instance of a named class
///
/// Every declared property exists from construction on, holding
/// [`Value::Null`] until assigned. Properties keep declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: String,
    properties: Vec<(String, Value)>,
}

impl Object {
    /// Allocate an instance with all declared properties set to null
    pub fn new<I, S>(class: impl Into<String>, declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut properties: Vec<(String, Value)> = Vec::new();
        for name in declared {
            let name = name.into();
            if !properties.iter().any(|(existing, _)| *existing == name) {
                properties.push((name, Value::Null));
            }
        }

        Self {
            class: class.into(),
            properties,
        }
    }

    /// Class identifier of this instance
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Assign a declared property
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotDeclared`] when the class has no such property.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match self.properties.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::property_not_declared(&self.class, name)),
        }
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the class declares the property
    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|(key, _)| key == name)
    }

    /// Iterate over properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Names of all declared properties
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Number of declared properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the class declares no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (key, value) in &self.properties {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_starts_with_null_properties() {
        let obj = Object::new("Option", ["name"]);
        assert_eq!(obj.class_name(), "Option");
        assert_eq!(obj.len(), 1);
        assert!(obj.get("name").unwrap().is_null());
    }

    #[test]
    fn test_object_deduplicates_declared_names() {
        let obj = Object::new("Car", ["model", "year", "model"]);
        assert_eq!(obj.property_names(), vec!["model", "year"]);
    }

    #[test]
    fn test_object_set_declared_property() {
        let mut obj = Object::new("Car", ["model"]);
        obj.set("model", Value::from("Golf R")).unwrap();
        assert_eq!(obj.get("model").and_then(Value::as_str), Some("Golf R"));
    }

    #[test]
    fn test_object_set_undeclared_property_fails() {
        let mut obj = Object::new("Car", ["model"]);
        let err = obj.set("wheels", Value::Integer(4)).unwrap_err();
        assert!(matches!(err, Error::PropertyNotDeclared { .. }));
        assert!(err.to_string().contains("wheels"));
        assert!(!obj.contains("wheels"));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(2016).as_i64(), Some(2016));
        assert_eq!(Value::Float(7.7).as_f64(), Some(7.7));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::from("x").as_i64(), None);
        assert_eq!(Value::List(vec![Value::Null]).as_list().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_object_serializes_as_map_in_declaration_order() {
        let mut obj = Object::new("Manufacturer", ["name", "founded"]);
        obj.set("name", Value::from("Volkswagen")).unwrap();
        let founded = NaiveDate::from_ymd_opt(1937, 1, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        obj.set("founded", Value::DateTime(founded)).unwrap();

        let json = serde_json::to_string(&obj).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Volkswagen","founded":"1937-01-04T00:00:00"}"#
        );
    }

    #[test]
    fn test_null_and_list_serialization() {
        let value = Value::List(vec![Value::Null, Value::Boolean(false), Value::Integer(3)]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[null,false,3]");
    }
}
