//! Typed extraction of mapped objects

use serde::de::DeserializeOwned;
use xmlmap_ir::Object;

/// Deserialize a mapped object into a Rust type
///
/// Properties that were never assigned are omitted, so they land on the
/// type's `Option`/`#[serde(default)]` fields instead of failing on null.
/// Dates serialize in ISO 8601 and read back into chrono types.
pub fn from_object<T: DeserializeOwned>(object: &Object) -> crate::Result<T> {
    let mut json = serde_json::to_value(object).map_err(|e| {
        crate::Error::Extraction(format!("cannot serialize {}: {e}", object.class_name()))
    })?;
    prune_nulls(&mut json);

    serde_json::from_value(json).map_err(|e| {
        crate::Error::Extraction(format!("cannot build {}: {e}", object.class_name()))
    })
}

fn prune_nulls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use xmlmap_ir::Value;

    #[derive(Debug, Deserialize, PartialEq)]
    struct CarOption {
        name: String,
        #[serde(default)]
        code: Option<i64>,
    }

    #[test]
    fn test_unassigned_properties_are_omitted() {
        let mut object = Object::new("Option", ["name", "code"]);
        object.set("name", Value::from("Technology Package")).unwrap();

        let option: CarOption = from_object(&object).unwrap();
        assert_eq!(
            option,
            CarOption {
                name: "Technology Package".to_string(),
                code: None
            }
        );
    }

    #[test]
    fn test_shape_mismatch_is_extraction_error() {
        let mut object = Object::new("Option", ["name"]);
        object.set("name", Value::Integer(3)).unwrap();

        let err = from_object::<CarOption>(&object).unwrap_err();
        assert!(matches!(err, crate::Error::Extraction(_)));
        assert!(err.to_string().contains("Option"));
    }
}
