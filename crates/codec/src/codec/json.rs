//! serde_json document codec.
//!
//! Records map to documents through their serde implementation, so the
//! canonical mapping is exactly the record's `Serialize`/`Deserialize`
//! behaviour (renames, defaults, skipped fields).

use super::traits::DocumentCodec;
use crate::record::Record;
use attrmap_core::{json_type_name, Document, DocumentError};
use serde_json::Value as JsonValue;

/// Document codec backed by `serde_json`.
///
/// # Example
///
/// ```
/// use attrmap_codec::{DocumentCodec, JsonDocumentCodec};
///
/// let codec = JsonDocumentCodec;
/// let mut record = serde_json::Map::new();
/// record.insert("bar".to_string(), "hello world".into());
///
/// let document = codec.to_document(&record).unwrap();
/// assert_eq!(document.get("bar").unwrap(), "hello world");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentCodec;

impl DocumentCodec for JsonDocumentCodec {
    fn to_document<R: Record>(&self, record: &R) -> Result<Document, DocumentError> {
        match serde_json::to_value(record)? {
            JsonValue::Object(document) => Ok(document),
            other => Err(DocumentError::NotAnObject(json_type_name(&other))),
        }
    }

    fn from_document<R: Record>(&self, document: Document) -> Result<R, DocumentError> {
        Ok(serde_json::from_value(JsonValue::Object(document))?)
    }

    fn codec_id(&self) -> &str {
        "json"
    }
}
