//! Attribute value types
//!
//! This module defines:
//! - AttributeValue: tagged value native to the key-value store
//! - AttributeMap: one stored item, field name to attribute value
//!
//! ## Attribute Model
//!
//! The AttributeValue enum has exactly 10 variants, mirroring the store's
//! wire tags:
//! - String (`S`), Number (`N`), Binary (`B`), Bool (`BOOL`), Null (`NULL`)
//! - List (`L`), Map (`M`)
//! - StringSet (`SS`), NumberSet (`NS`), BinarySet (`BS`)
//!
//! Numbers are carried as decimal text so that no precision is lost
//! between the store and the document layer. Binary payloads serialize as
//! base64 and `NULL` as `true`, the same way the store's JSON wire format
//! carries them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One stored item: field name to attribute value.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// Tagged attribute value
///
/// Different variants are NEVER equal, even when they carry the same text:
/// - `String("1") != Number("1")`
/// - `Binary(b"a") != String("a")`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// UTF-8 string
    #[serde(rename = "S")]
    String(String),
    /// Number as decimal text
    #[serde(rename = "N")]
    Number(String),
    /// Raw bytes
    #[serde(rename = "B", with = "base64_bytes")]
    Binary(Vec<u8>),
    /// Boolean value
    #[serde(rename = "BOOL")]
    Bool(bool),
    /// Null value, `{"NULL": true}` on the wire
    #[serde(rename = "NULL", with = "null_flag")]
    Null,
    /// Ordered list of values
    #[serde(rename = "L")]
    List(Vec<AttributeValue>),
    /// Nested map
    #[serde(rename = "M")]
    Map(AttributeMap),
    /// Set of strings
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
    /// Set of numbers as decimal text
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
    /// Set of byte strings
    #[serde(rename = "BS", with = "base64_bytes_set")]
    BinarySet(Vec<Vec<u8>>),
}

impl AttributeValue {
    /// Get the wire tag of this value
    pub fn tag(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "S",
            AttributeValue::Number(_) => "N",
            AttributeValue::Binary(_) => "B",
            AttributeValue::Bool(_) => "BOOL",
            AttributeValue::Null => "NULL",
            AttributeValue::List(_) => "L",
            AttributeValue::Map(_) => "M",
            AttributeValue::StringSet(_) => "SS",
            AttributeValue::NumberSet(_) => "NS",
            AttributeValue::BinarySet(_) => "BS",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Check if this is a map value
    pub fn is_map(&self) -> bool {
        matches!(self, AttributeValue::Map(_))
    }

    /// Check if this is a list value
    pub fn is_list(&self) -> bool {
        matches!(self, AttributeValue::List(_))
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the decimal text if this is a Number value
    pub fn as_number(&self) -> Option<&str> {
        match self {
            AttributeValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a Binary value
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            AttributeValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as &[AttributeValue] if this is a List value
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get as &AttributeMap if this is a Map value
    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttributeValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Number(i.to_string())
    }
}

impl From<u64> for AttributeValue {
    fn from(u: u64) -> Self {
        AttributeValue::Number(u.to_string())
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(b: Vec<u8>) -> Self {
        AttributeValue::Binary(b)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(l: Vec<AttributeValue>) -> Self {
        AttributeValue::List(l)
    }
}

impl From<AttributeMap> for AttributeValue {
    fn from(m: AttributeMap) -> Self {
        AttributeValue::Map(m)
    }
}

mod null_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(), D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(())
        } else {
            Err(de::Error::custom("NULL attribute must be true"))
        }
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded)
            .map_err(|e| de::Error::custom(format!("Invalid base64: {}", e)))
    }
}

mod base64_bytes_set {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(set: &Vec<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(set.iter().map(|b| BASE64.encode(b)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .into_iter()
            .map(|encoded| {
                BASE64
                    .decode(encoded)
                    .map_err(|e| de::Error::custom(format!("Invalid base64: {}", e)))
            })
            .collect()
    }
}
