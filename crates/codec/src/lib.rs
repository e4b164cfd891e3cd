//! Encode and decode pipelines between typed records and attribute maps
//!
//! A record is converted to an item in two independent stages, pivoting
//! through a canonical JSON document:
//!
//! ```text
//! encode: record --DocumentCodec--> Document --AttributeCodec--> AttributeMap
//! decode: AttributeMap --AttributeCodec--> Document --DocumentCodec--> record
//! ```
//!
//! Both pipelines accept a single record or a homogeneous collection and
//! report failures with the stage and element index that produced them.
//!
//! # Example
//!
//! ```
//! use attrmap_codec::{marshal, unmarshal, AttributeValue, Record, RecordInput, RecordOutput};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default)]
//! #[serde(default)]
//! struct Foo {
//!     bar: String,
//! }
//!
//! impl Record for Foo {}
//!
//! let input = Foo { bar: "hello world".into() };
//! let item = marshal(RecordInput::One(&input)).unwrap().into_one().unwrap();
//! assert_eq!(item["bar"], AttributeValue::String("hello world".into()));
//!
//! let mut output = Foo::default();
//! unmarshal(&item, RecordOutput::One(&mut output)).unwrap();
//! assert_eq!(output.bar, "hello world");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod codec;
pub mod config;
pub mod converter;
mod decode;
mod encode;
pub mod record;
pub mod registry;

pub use classify::{AttributeInput, Marshaled, RecordInput, RecordOutput, Shape};
pub use codec::{AttributeCodec, DocumentCodec, JsonDocumentCodec, StandardAttributeCodec};
pub use config::{ConfigError, ConverterConfig, CONFIG_FILE_NAME};
pub use converter::Converter;
pub use record::{Record, TableRecord};
pub use registry::{ElementType, RecordRegistry, Registration};

pub use attrmap_core::{
    item_size, value_size, AttributeError, AttributeMap, AttributeValue, AttributeValueUpdate, BillingMode, Cause,
    Document, DocumentError, Error, ErrorKind, KeyError, KeySchema, LimitError, Limits, Result,
    TableSchema, UpdateAction, UpdateMap,
};

/// Encode a record or a collection of records with the default converter.
pub fn marshal<R: Record>(input: RecordInput<'_, R>) -> Result<Marshaled> {
    Converter::new().marshal(input)
}

/// Decode an item or a sequence of items with the default converter.
pub fn unmarshal<'a, R: Record>(
    input: impl Into<AttributeInput<'a>>,
    output: RecordOutput<'_, R>,
) -> Result<()> {
    Converter::new().unmarshal(input, output)
}

/// Translate an item into an update map that sets every attribute.
pub fn to_update_map(item: &AttributeMap) -> UpdateMap {
    attrmap_core::to_update_map(item)
}
