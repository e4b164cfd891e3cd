//! Update maps derived from encoded items.

use crate::common::*;
use attrmap::{to_update_map, AttributeValue, Converter, UpdateAction};

#[test]
fn test_update_map_has_same_keys_and_put_actions() {
    let item = Converter::new().marshal_record(&order("c-1", 7)).unwrap();
    let updates = to_update_map(&item);

    assert_eq!(updates.len(), item.len());
    for (name, value) in &item {
        let update = &updates[name];
        assert_eq!(update.action, UpdateAction::Put);
        assert_eq!(&update.value, value);
    }
}

#[test]
fn test_update_map_of_hello_world() {
    let updates = to_update_map(&hello_world_item());
    assert_eq!(updates.len(), 1);
    assert_eq!(updates["bar"].value, AttributeValue::from("hello world"));
}

#[test]
fn test_update_map_does_not_consume_item() {
    let item = hello_world_item();
    let first = to_update_map(&item);
    let second = to_update_map(&item);
    assert_eq!(first, second);
    assert_eq!(item, hello_world_item());
}

#[test]
fn test_update_map_wire_form() {
    let updates = to_update_map(&hello_world_item());
    let json = serde_json::to_value(&updates).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"bar": {"value": {"S": "hello world"}, "action": "PUT"}})
    );
}
