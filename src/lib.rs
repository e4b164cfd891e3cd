//! attrmap - typed records to key/value store attribute maps
//!
//! Converts serde-mapped records into the tagged attribute maps a
//! schemaless key/value store persists, and back. Single records and
//! homogeneous collections go through the same two calls:
//!
//! ```
//! use attrmap::{marshal, unmarshal, Record, RecordInput, RecordOutput};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
//! #[serde(default)]
//! struct Foo {
//!     bar: String,
//! }
//!
//! impl Record for Foo {}
//!
//! let records = vec![Foo { bar: "a".into() }, Foo { bar: "b".into() }];
//! let items = marshal(RecordInput::Many(&records)).unwrap();
//!
//! let mut restored: Vec<Foo> = Vec::new();
//! unmarshal(&items, RecordOutput::Many(&mut restored)).unwrap();
//! assert_eq!(restored, records);
//! ```
//!
//! # Architecture
//!
//! The pipelines live in `attrmap-codec`; the value model, error taxonomy
//! and table descriptors live in `attrmap-core`. Everything public is
//! re-exported here.

pub use attrmap_codec::*;
