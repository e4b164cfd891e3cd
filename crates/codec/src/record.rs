//! The record capability.
//!
//! A record is any serde-mapped type that opts in by implementing
//! [`Record`]. Its serde mapping is its canonical document mapping: field
//! names, defaults and skipped fields all come from the type's derive
//! attributes, not from this crate.

use attrmap_core::{Document, TableSchema};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A schema-defined record that can be converted to and from attribute maps.
///
/// # Example
///
/// ```
/// use attrmap_codec::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Default)]
/// #[serde(default)]
/// struct Greeting {
///     bar: String,
/// }
///
/// impl Record for Greeting {}
/// ```
pub trait Record: Serialize + DeserializeOwned + 'static {
    /// Name used in logs and error messages
    fn record_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A record stored in a known table.
pub trait TableRecord: Record {
    /// Table name, key layout and billing mode of the record's table
    fn table_schema() -> TableSchema;
}

/// Free-form records: any JSON object is its own canonical document.
impl Record for Document {}
