//! Converters built from `attrmap.toml`.

use crate::common::*;
use attrmap::{AttributeValue, ConfigError, Converter, ConverterConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn converter_from(content: &str) -> Converter {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    let config = ConverterConfig::from_file(&path).unwrap();
    Converter::with_config(&config).unwrap()
}

#[test]
fn test_default_file_behaves_like_default_converter() {
    let converter = converter_from(ConverterConfig::default_toml());
    let input = order("c-1", 3);
    assert_eq!(
        converter.marshal_record(&input).unwrap(),
        Converter::new().marshal_record(&input).unwrap()
    );
}

#[test]
fn test_omit_nulls_from_file() {
    let converter = converter_from("omit_nulls = true\n");
    let item = converter.marshal_record(&order("c-1", 3)).unwrap();
    assert!(!item.contains_key("note"));

    let output: Order = converter.unmarshal_record(&item).unwrap();
    assert_eq!(output.note, None);
}

#[test]
fn test_disabled_size_limit_from_file() {
    let converter = converter_from("max_item_bytes = 0\n");
    let big = "x".repeat(500 * 1024);
    let item = converter.marshal_record(&Foo::new(&big)).unwrap();
    assert_eq!(item["bar"], AttributeValue::String(big));

    assert!(Converter::new().marshal_record(&Foo::new(&"x".repeat(500 * 1024))).is_err());
}

#[test]
fn test_invalid_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "max_nesting_depth = \"deep\"\n").unwrap();

    let err = ConverterConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
