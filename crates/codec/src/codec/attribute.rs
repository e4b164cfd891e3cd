//! Standard attribute codec.
//!
//! Maps documents to items following the store's attribute conventions:
//!
//! | Document | Attribute |
//! |----------|-----------|
//! | null | `NULL` (dropped when `omit_nulls` is set) |
//! | bool | `BOOL` |
//! | number | `N` (decimal text) |
//! | string | `S` |
//! | array | `L` |
//! | object | `M` |
//!
//! Decoding also accepts the variants documents never produce: `B` and
//! `BS` become base64 strings, `SS` and `NS` become arrays.

use super::traits::AttributeCodec;
use attrmap_core::{AttributeError, AttributeMap, AttributeValue, Document, Limits};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Number, Value as JsonValue};

/// Attribute codec following the store's conventions.
#[derive(Debug, Clone, Default)]
pub struct StandardAttributeCodec {
    limits: Limits,
    omit_nulls: bool,
}

impl StandardAttributeCodec {
    /// Create a codec enforcing `limits`
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            omit_nulls: false,
        }
    }

    /// Drop null object fields instead of storing `NULL` attributes
    pub fn with_omit_nulls(mut self, omit_nulls: bool) -> Self {
        self.omit_nulls = omit_nulls;
        self
    }

    /// Limits enforced by this codec
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    fn encode_object(
        &self,
        object: &Document,
        depth: usize,
    ) -> Result<AttributeMap, AttributeError> {
        let mut item = AttributeMap::with_capacity(object.len());
        for (name, value) in object {
            if self.omit_nulls && value.is_null() {
                continue;
            }
            item.insert(name.clone(), self.encode_value(value, depth)?);
        }
        Ok(item)
    }

    fn encode_value(&self, value: &JsonValue, depth: usize) -> Result<AttributeValue, AttributeError> {
        self.limits.check_depth(depth)?;
        Ok(match value {
            JsonValue::Null => AttributeValue::Null,
            JsonValue::Bool(b) => AttributeValue::Bool(*b),
            JsonValue::Number(n) => AttributeValue::Number(n.to_string()),
            JsonValue::String(s) => AttributeValue::String(s.clone()),
            JsonValue::Array(items) => AttributeValue::List(
                items
                    .iter()
                    .map(|v| self.encode_value(v, depth + 1))
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(object) => AttributeValue::Map(self.encode_object(object, depth + 1)?),
        })
    }

    fn decode_item(&self, item: &AttributeMap, depth: usize) -> Result<Document, AttributeError> {
        item.iter()
            .map(|(name, value)| Ok((name.clone(), self.decode_value(value, depth)?)))
            .collect()
    }

    fn decode_value(&self, value: &AttributeValue, depth: usize) -> Result<JsonValue, AttributeError> {
        self.limits.check_depth(depth)?;
        Ok(match value {
            AttributeValue::String(s) => JsonValue::String(s.clone()),
            AttributeValue::Number(n) => JsonValue::Number(parse_number(n)?),
            AttributeValue::Binary(b) => JsonValue::String(BASE64.encode(b)),
            AttributeValue::Bool(b) => JsonValue::Bool(*b),
            AttributeValue::Null => JsonValue::Null,
            AttributeValue::List(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|v| self.decode_value(v, depth + 1))
                    .collect::<Result<_, _>>()?,
            ),
            AttributeValue::Map(item) => JsonValue::Object(self.decode_item(item, depth + 1)?),
            AttributeValue::StringSet(set) => {
                JsonValue::Array(set.iter().cloned().map(JsonValue::String).collect())
            }
            AttributeValue::NumberSet(set) => JsonValue::Array(
                set.iter()
                    .map(|n| parse_number(n).map(JsonValue::Number))
                    .collect::<Result<_, _>>()?,
            ),
            AttributeValue::BinarySet(set) => JsonValue::Array(
                set.iter()
                    .map(|b| JsonValue::String(BASE64.encode(b)))
                    .collect(),
            ),
        })
    }
}

impl AttributeCodec for StandardAttributeCodec {
    fn to_attribute_map(&self, document: &Document) -> Result<AttributeMap, AttributeError> {
        let item = self.encode_object(document, 0)?;
        self.limits.validate_item(&item)?;
        Ok(item)
    }

    fn from_attribute_map(&self, item: &AttributeMap) -> Result<Document, AttributeError> {
        self.decode_item(item, 0)
    }

    fn codec_id(&self) -> &str {
        "standard"
    }
}

/// Parse number text as i64, then u64, then f64.
///
/// The f64 must be finite and keep every significant digit of the text;
/// anything else is `InvalidNumber`, so decoding never rewrites a stored
/// number.
fn parse_number(text: &str) -> Result<Number, AttributeError> {
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Ok(Number::from(u));
    }
    let invalid = || AttributeError::InvalidNumber(text.to_string());
    let f = text.parse::<f64>().map_err(|_| invalid())?;
    let number = Number::from_f64(f).ok_or_else(invalid)?;
    match (decimal_digits(text), decimal_digits(&f.to_string())) {
        (Some(stored), Some(decoded)) if stored == decoded => Ok(number),
        _ => Err(invalid()),
    }
}

/// Sign, significant digits and decimal exponent of number text.
///
/// `"-1.50"`, `"-15e-1"` and `"-0.015E2"` all give `(true, "15", -1)`;
/// every zero gives `(false, "", 0)`.
fn decimal_digits(text: &str) -> Option<(bool, String, i64)> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{}{}", integer, fraction);
    let digits = digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        return Some((false, String::new(), 0));
    }
    let trailing = (digits.len() - significant.len()) as i64;
    let exponent = exponent - fraction.len() as i64 + trailing;
    Some((negative, significant.to_string(), exponent))
}
