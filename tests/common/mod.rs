//! Shared test fixtures for the integration suites.
//!
//! Import via `mod common;` from any suite's main.rs.

#![allow(dead_code)]

use attrmap::{AttributeMap, AttributeValue, KeySchema, Record, TableRecord, TableSchema};
use serde::{Deserialize, Serialize};

/// The single-field record used throughout the scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Foo {
    pub bar: String,
}

impl Record for Foo {}

impl Foo {
    pub fn new(bar: &str) -> Self {
        Foo {
            bar: bar.to_string(),
        }
    }
}

/// A record with nested, optional and numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub customer_id: String,
    pub order_id: i64,
    pub total: f64,
    pub paid: bool,
    pub note: Option<String>,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub quantity: u32,
}

impl Record for Order {}

impl TableRecord for Order {
    fn table_schema() -> TableSchema {
        TableSchema::new("orders", KeySchema::composite("customer_id", "order_id"))
    }
}

pub fn order(customer_id: &str, order_id: i64) -> Order {
    Order {
        customer_id: customer_id.to_string(),
        order_id,
        total: 12.5,
        paid: true,
        note: None,
        lines: vec![OrderLine {
            sku: "sku-1".to_string(),
            quantity: 2,
        }],
    }
}

/// Build an item from `(name, value)` pairs.
pub fn item<const N: usize>(fields: [(&str, AttributeValue); N]) -> AttributeMap {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// The `{"bar": S("hello world")}` item.
pub fn hello_world_item() -> AttributeMap {
    item([("bar", AttributeValue::from("hello world"))])
}
