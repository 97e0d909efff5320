//! Integration tests parsing the XML samples in testdata/xml.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use xmlmap_xml::{parse_reader, parse_str};

fn xml_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata/xml")
        .join(file_name)
}

#[test]
fn test_car_sample_structure() -> anyhow::Result<()> {
    let car = parse_reader(BufReader::new(File::open(xml_path("car.xml"))?))?;

    assert_eq!(car.name, "car");
    assert!(car.text.is_empty());
    let names: Vec<&str> = car.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "manufacturer",
            "model",
            "year",
            "msrp",
            "colours",
            "options",
            "hybrid",
            "awd",
            "HorsePower",
            "litres_per_hundred",
        ]
    );

    let options = car.find_child("options").unwrap();
    assert_eq!(options.find_children("option").len(), 2);
    assert_eq!(
        options.children[0].find_child("name").unwrap().text,
        "19-inch \"Pretoria\" Wheels"
    );
    assert_eq!(car.find_child("year").unwrap().text, "2016");
    Ok(())
}

#[test]
fn test_reader_and_str_agree_on_sample() -> anyhow::Result<()> {
    let text = std::fs::read_to_string(xml_path("car.xml"))?;
    let from_str = parse_str(&text)?;
    let from_reader = parse_reader(BufReader::new(File::open(xml_path("car.xml"))?))?;
    assert_eq!(from_str, from_reader);
    Ok(())
}
