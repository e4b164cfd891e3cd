//! Canonical document types
//!
//! A document is the schema-agnostic pivot between a typed record and an
//! attribute map: a JSON object keyed by field name. Documents only exist
//! for the duration of one conversion.

use serde_json::Value as JsonValue;

/// Canonical document: field name to dynamically typed value.
pub type Document = serde_json::Map<String, JsonValue>;

/// Name of a JSON value's type, used in error messages
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
