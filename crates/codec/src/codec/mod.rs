//! Codec seams of the conversion pipelines.
//!
//! Two independent transforms sit behind traits so each stage can be
//! replaced and tested on its own:
//!
//! - [`DocumentCodec`]: record ⇄ canonical document ([`JsonDocumentCodec`])
//! - [`AttributeCodec`]: canonical document ⇄ item ([`StandardAttributeCodec`])
//!
//! # Usage
//!
//! ```
//! use attrmap_codec::{AttributeCodec, StandardAttributeCodec};
//! use attrmap_core::AttributeValue;
//!
//! let codec = StandardAttributeCodec::default();
//! let mut document = serde_json::Map::new();
//! document.insert("bar".to_string(), "hello world".into());
//!
//! let item = codec.to_attribute_map(&document).unwrap();
//! assert_eq!(item["bar"], AttributeValue::String("hello world".into()));
//! ```

mod attribute;
mod json;
mod traits;

pub use attribute::StandardAttributeCodec;
pub use json::JsonDocumentCodec;
pub use traits::{AttributeCodec, DocumentCodec};
