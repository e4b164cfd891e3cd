//! Inputs and destinations of the wrong shape are rejected before any
//! conversion happens.

use crate::common::*;
use attrmap::{AttributeValue, Converter, ErrorKind, RecordOutput};

#[test]
fn test_dynamic_marshal_of_non_record() {
    let err = Converter::new().marshal_any(&"not a record").unwrap_err();
    assert!(err.is(ErrorKind::FailedToMarshal));
    assert!(err.is(ErrorKind::InvalidInput));
    assert!(err.to_string().contains("&str"));
}

#[test]
fn test_dynamic_marshal_of_unregistered_record() {
    let err = Converter::new().marshal_any(&Foo::new("x")).unwrap_err();
    assert!(err.is(ErrorKind::InvalidInput));
}

#[test]
fn test_dynamic_unmarshal_into_non_record() {
    let mut output = String::new();
    let err = Converter::new()
        .unmarshal_any(&hello_world_item(), &mut output)
        .unwrap_err();
    assert!(err.is(ErrorKind::FailedToUnmarshal));
    assert!(err.is(ErrorKind::InvalidOutput));
    assert!(output.is_empty());
}

#[test]
fn test_single_item_into_collection() {
    let mut output = vec![Foo::new("keep")];
    let err = Converter::new()
        .unmarshal(&hello_world_item(), RecordOutput::Many(&mut output))
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidOutput));
    assert_eq!(output, vec![Foo::new("keep")]);
}

#[test]
fn test_sequence_into_single_record() {
    let items = vec![hello_world_item(), hello_world_item()];
    let mut output = Foo::new("keep");
    let err = Converter::new()
        .unmarshal(&items, RecordOutput::One(&mut output))
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidOutput));
    assert_eq!(output, Foo::new("keep"));
}

#[test]
fn test_list_value_into_single_record() {
    let value = AttributeValue::List(vec![AttributeValue::Map(hello_world_item())]);
    let mut output = Foo::default();
    let err = Converter::new()
        .unmarshal(&value, RecordOutput::One(&mut output))
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidOutput));
}
