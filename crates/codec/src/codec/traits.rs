//! Codec trait definitions.
//!
//! The pipelines compose two independent transforms:
//!
//! ```text
//! record <-- DocumentCodec --> Document <-- AttributeCodec --> AttributeMap
//! ```
//!
//! Keeping them separate lets every failure be attributed to one stage.

use crate::record::Record;
use attrmap_core::{AttributeError, AttributeMap, AttributeValue, Document, DocumentError};

/// Record ⇄ canonical document codec.
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync` so one converter can serve many threads.
pub trait DocumentCodec: Send + Sync {
    /// Convert a record into its canonical document.
    ///
    /// Records whose canonical form is not an object must fail.
    fn to_document<R: Record>(&self, record: &R) -> Result<Document, DocumentError>;

    /// Build a record from a canonical document.
    fn from_document<R: Record>(&self, document: Document) -> Result<R, DocumentError>;

    /// Unique codec identifier.
    fn codec_id(&self) -> &str;
}

/// Canonical document ⇄ attribute map codec.
pub trait AttributeCodec: Send + Sync {
    /// Convert a document into an item.
    fn to_attribute_map(&self, document: &Document) -> Result<AttributeMap, AttributeError>;

    /// Convert an item into a document.
    fn from_attribute_map(&self, item: &AttributeMap) -> Result<Document, AttributeError>;

    /// Convert a single attribute value holding an item into a document.
    ///
    /// Only map values hold items; everything else fails with
    /// `AttributeError::NotAMap`.
    fn value_to_document(&self, value: &AttributeValue) -> Result<Document, AttributeError> {
        match value {
            AttributeValue::Map(item) => self.from_attribute_map(item),
            other => Err(AttributeError::NotAMap(other.tag())),
        }
    }

    /// Unique codec identifier.
    fn codec_id(&self) -> &str;
}
