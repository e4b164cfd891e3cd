//! Size limits for stored items
//!
//! This module defines configurable limits enforced by the attribute codec
//! when it builds or reads an item. Violations surface as `LimitError`s
//! wrapped in the attribute stage of the pipeline.
//!
//! ## Defaults
//!
//! The defaults match the store: 32 levels of nesting and 400 KB per item.

use crate::value::{AttributeMap, AttributeValue};
use thiserror::Error;

/// Default maximum nesting depth for lists and maps
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Default maximum item size in bytes (400 KB)
pub const DEFAULT_MAX_ITEM_BYTES: usize = 400 * 1024;

/// Size limits for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth (default: 32)
    ///
    /// Top-level attribute values sit at depth 0; every list or map adds one.
    pub max_nesting_depth: usize,

    /// Maximum item size in bytes (default: 400 KB, 0 disables the check)
    pub max_item_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_item_bytes: DEFAULT_MAX_ITEM_BYTES,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_nesting_depth: 2,
            max_item_bytes: 64,
        }
    }

    /// Validate a nesting depth reached while walking a value
    pub fn check_depth(&self, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }
        Ok(())
    }

    /// Validate the accounted size of a whole item
    pub fn validate_item(&self, item: &AttributeMap) -> Result<(), LimitError> {
        if self.max_item_bytes == 0 {
            return Ok(());
        }
        let size = item_size(item);
        if size > self.max_item_bytes {
            return Err(LimitError::ItemTooLarge {
                actual: size,
                max: self.max_item_bytes,
            });
        }
        Ok(())
    }
}

/// Accounted size of an item in bytes.
///
/// Attribute names count their UTF-8 length; values follow `value_size`.
pub fn item_size(item: &AttributeMap) -> usize {
    item.iter().map(|(k, v)| k.len() + value_size(v)).sum()
}

/// Accounted size of one attribute value in bytes.
pub fn value_size(value: &AttributeValue) -> usize {
    match value {
        AttributeValue::String(s) => s.len(),
        AttributeValue::Number(n) => number_size(n),
        AttributeValue::Binary(b) => b.len(),
        AttributeValue::Bool(_) | AttributeValue::Null => 1,
        AttributeValue::List(items) => 3 + items.iter().map(|v| 1 + value_size(v)).sum::<usize>(),
        AttributeValue::Map(map) => {
            3 + map
                .iter()
                .map(|(k, v)| 1 + k.len() + value_size(v))
                .sum::<usize>()
        }
        AttributeValue::StringSet(set) => set.iter().map(String::len).sum(),
        AttributeValue::NumberSet(set) => set.iter().map(|n| number_size(n)).sum(),
        AttributeValue::BinarySet(set) => set.iter().map(Vec::len).sum(),
    }
}

// One byte per two significant digits, plus one.
fn number_size(text: &str) -> usize {
    let digits = text
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count();
    (digits + 1) / 2 + 1
}

/// Limit validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Value nesting exceeds maximum depth
    #[error("Nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Actual nesting depth
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// Item exceeds the size limit
    #[error("Item too large: {actual} bytes exceeds maximum {max}")]
    ItemTooLarge {
        /// Accounted item size
        actual: usize,
        /// Maximum allowed size
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code for the violation
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::NestingTooDeep { .. } => "nesting_too_deep",
            LimitError::ItemTooLarge { .. } => "item_too_large",
        }
    }
}
