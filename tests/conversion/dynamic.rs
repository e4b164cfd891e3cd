//! Runtime-typed entry points backed by the record registry.

use crate::common::*;
use attrmap::{AttributeValue, Converter, Document, ErrorKind, Marshaled};
use std::any::Any;

fn converter() -> Converter {
    Converter::new().register::<Foo>().register::<Order>()
}

#[test]
fn test_marshal_any_single_and_vec() {
    let converter = converter();

    let one = converter.marshal_any(&Foo::new("hello world")).unwrap();
    assert_eq!(one, Marshaled::One(hello_world_item()));

    let many = converter
        .marshal_any(&vec![Foo::new("a"), Foo::new("b")])
        .unwrap()
        .into_many()
        .unwrap();
    assert_eq!(many[1]["bar"], AttributeValue::from("b"));
}

#[test]
fn test_marshal_any_boxed_homogeneous() {
    let elements: Vec<Box<dyn Any>> = vec![Box::new(order("c-1", 1)), Box::new(order("c-1", 2))];
    let items = converter()
        .marshal_any(&elements)
        .unwrap()
        .into_many()
        .unwrap();
    assert_eq!(items[1]["order_id"], AttributeValue::Number("2".into()));
}

#[test]
fn test_marshal_any_boxed_heterogeneous_rejected() {
    let elements: Vec<Box<dyn Any>> = vec![Box::new(Foo::new("a")), Box::new(order("c-1", 1))];
    let err = converter().marshal_any(&elements).unwrap_err();
    assert!(err.is(ErrorKind::InvalidInput));
    assert!(err.is(ErrorKind::FailedToMarshal));
    assert!(!err.is(ErrorKind::FailedToMarshalIntermediary));
}

#[test]
fn test_marshal_any_boxed_empty_rejected() {
    let elements: Vec<Box<dyn Any>> = Vec::new();
    let err = converter().marshal_any(&elements).unwrap_err();
    assert!(err.is(ErrorKind::InvalidInput));
}

#[test]
fn test_marshal_any_boxed_unregistered_rejected() {
    let elements: Vec<Box<dyn Any>> = vec![Box::new(1u8), Box::new(2u8)];
    let err = converter().marshal_any(&elements).unwrap_err();
    assert!(err.is(ErrorKind::InvalidInput));
}

#[test]
fn test_unmarshal_any_roundtrip() {
    let converter = converter();
    let input = vec![order("c-1", 1), order("c-2", 2)];
    let items = converter.marshal_any(&input).unwrap();

    let mut output: Vec<Order> = Vec::new();
    converter.unmarshal_any(&items, &mut output).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_unmarshal_any_document() {
    let mut output = Document::new();
    Converter::new()
        .unmarshal_any(&hello_world_item(), &mut output)
        .unwrap();
    assert_eq!(output["bar"], "hello world");
}

#[test]
fn test_unmarshal_any_shape_mismatch() {
    let mut output: Vec<Foo> = Vec::new();
    let err = converter()
        .unmarshal_any(&hello_world_item(), &mut output)
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidOutput));
}

#[test]
fn test_marshal_any_boxed_record() {
    let boxed: Box<dyn Any> = Box::new(Foo::new("hello world"));
    let one = converter().marshal_any(&boxed).unwrap();
    assert_eq!(one, Marshaled::One(hello_world_item()));
}

#[test]
fn test_marshal_dyn_record() {
    let foo = Foo::new("hello world");
    let value: &dyn Any = &foo;
    let one = converter().marshal_dyn(value).unwrap();
    assert_eq!(one, Marshaled::One(hello_world_item()));
}

#[test]
fn test_marshal_any_boxed_single_unregistered_rejected() {
    let boxed: Box<dyn Any> = Box::new(7u64);
    let err = converter().marshal_any(&boxed).unwrap_err();
    assert!(err.is(ErrorKind::InvalidInput));
    assert!(err.is(ErrorKind::FailedToMarshal));
}

#[test]
fn test_unmarshal_any_boxed_destination() {
    let mut output: Box<dyn Any> = Box::new(Foo::default());
    converter()
        .unmarshal_any(&hello_world_item(), &mut output)
        .unwrap();
    assert_eq!(output.downcast_ref::<Foo>(), Some(&Foo::new("hello world")));
}

#[test]
fn test_unmarshal_any_boxed_unregistered_rejected() {
    let mut output: Box<dyn Any> = Box::new(String::new());
    let err = converter()
        .unmarshal_any(&hello_world_item(), &mut output)
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidOutput));
    assert_eq!(output.downcast_ref::<String>(), Some(&String::new()));
}
