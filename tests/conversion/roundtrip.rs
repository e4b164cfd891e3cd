//! Round-trip tests for single records and collections.

use crate::common::*;
use attrmap::{
    marshal, unmarshal, AttributeValue, Converter, Document, Marshaled, RecordInput,
    RecordOutput,
};
use serde_json::json;

fn document(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

#[test]
fn test_hello_world_encodes_to_string_attribute() {
    let item = marshal(RecordInput::One(&Foo::new("hello world")))
        .unwrap()
        .into_one()
        .unwrap();

    assert_eq!(item, hello_world_item());
}

#[test]
fn test_hello_world_decodes_from_string_attribute() {
    let mut output = Foo::default();
    unmarshal(&hello_world_item(), RecordOutput::One(&mut output)).unwrap();
    assert_eq!(output, Foo::new("hello world"));
}

#[test]
fn test_document_collection_roundtrip() {
    let input = vec![
        document(json!({"foo": "bar"})),
        document(json!({"bar": "baz"})),
    ];

    let items = marshal(RecordInput::Many(&input))
        .unwrap()
        .into_many()
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["foo"], AttributeValue::from("bar"));
    assert_eq!(items[1]["bar"], AttributeValue::from("baz"));

    let mut output: Vec<Document> = Vec::new();
    unmarshal(&items, RecordOutput::Many(&mut output)).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_collection_order_preserved() {
    let input: Vec<Foo> = (0..10).map(|i| Foo::new(&format!("item-{}", i))).collect();
    let items = marshal(RecordInput::Many(&input)).unwrap();

    let mut output: Vec<Foo> = Vec::new();
    unmarshal(&items, RecordOutput::Many(&mut output)).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_nested_record_roundtrip() {
    let converter = Converter::new();
    let mut input = order("c-1", 42);
    input.note = Some("leave at door".to_string());

    let item = converter.marshal_record(&input).unwrap();
    assert_eq!(item["order_id"], AttributeValue::Number("42".into()));
    assert_eq!(item["paid"], AttributeValue::Bool(true));
    let lines = item["lines"].as_list().unwrap();
    assert_eq!(
        lines[0].as_map().unwrap()["quantity"],
        AttributeValue::Number("2".into())
    );

    let output: Order = converter.unmarshal_record(&item).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_absent_option_is_null_attribute() {
    let item = Converter::new().marshal_record(&order("c-1", 1)).unwrap();
    assert_eq!(item["note"], AttributeValue::Null);

    let output: Order = Converter::new().unmarshal_record(&item).unwrap();
    assert_eq!(output.note, None);
}

#[test]
fn test_missing_fields_take_defaults() {
    let item = item([("customer_id", AttributeValue::from("c-9"))]);
    let output: Order = Converter::new().unmarshal_record(&item).unwrap();
    assert_eq!(output.customer_id, "c-9");
    assert_eq!(output.order_id, 0);
    assert!(output.lines.is_empty());
}

#[test]
fn test_empty_collection_roundtrip() {
    let input: Vec<Foo> = Vec::new();
    let result = marshal(RecordInput::Many(&input)).unwrap();
    assert_eq!(result, Marshaled::Many(vec![]));

    let mut output: Vec<Foo> = Vec::new();
    unmarshal(&result, RecordOutput::Many(&mut output)).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_list_attribute_decodes_as_collection() {
    let value = AttributeValue::List(vec![
        AttributeValue::Map(item([("bar", AttributeValue::from("a"))])),
        AttributeValue::Map(item([("bar", AttributeValue::from("b"))])),
    ]);

    let mut output: Vec<Foo> = Vec::new();
    unmarshal(&value, RecordOutput::Many(&mut output)).unwrap();
    assert_eq!(output, vec![Foo::new("a"), Foo::new("b")]);
}

#[test]
fn test_input_not_mutated() {
    let input = vec![Foo::new("x"), Foo::new("y")];
    let snapshot = input.clone();
    marshal(RecordInput::Many(&input)).unwrap();
    assert_eq!(input, snapshot);
}
