//! Integration tests for schema files in testdata/schemas.

use std::path::PathBuf;
use xmlmap_schema::{SchemaLoader, TypeDescriptor, TypeResolver};

fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/schemas")
}

#[test]
fn test_load_vehicles_by_name() -> anyhow::Result<()> {
    let loader = SchemaLoader::new(vec![schema_dir()]);
    let registry = loader.load("vehicles")?;

    assert_eq!(registry.class_names(), vec!["Car", "Manufacturer", "Option"]);
    assert_eq!(
        registry.properties_of("Car").map(|p| p.len()),
        Some(10)
    );
    assert_eq!(
        registry.type_of("Car", "options"),
        Some(TypeDescriptor::collection_of(TypeDescriptor::object("Option")))
    );
    assert_eq!(
        registry.type_of("Manufacturer", "founded"),
        Some(TypeDescriptor::object("DateTime"))
    );
    assert_eq!(registry.type_of("Car", "litresPerHundred"), Some(TypeDescriptor::float()));
    Ok(())
}

#[test]
fn test_load_json_file() -> anyhow::Result<()> {
    let registry = SchemaLoader::default().load_from_file(&schema_dir().join("vehicles.json"))?;

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.type_of("Option", "price"), Some(TypeDescriptor::float()));
    Ok(())
}

#[test]
fn test_yaml_and_json_files_merge() -> anyhow::Result<()> {
    let loader = SchemaLoader::default();
    let mut registry = loader.load_from_file(&schema_dir().join("vehicles.yaml"))?;
    registry.extend(loader.load_from_file(&schema_dir().join("vehicles.json"))?);

    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.properties_of("Option"),
        Some(vec!["name".to_string(), "price".to_string()])
    );
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SchemaLoader::default()
        .load_from_file(&schema_dir().join("trucks.yaml"))
        .unwrap_err();
    assert!(matches!(err, xmlmap_schema::Error::Io(_)));
}
