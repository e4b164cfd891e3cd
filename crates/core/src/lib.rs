//! Core types for attrmap
//!
//! This crate defines the foundational types shared by the conversion
//! pipelines:
//! - AttributeValue / AttributeMap: the store's tagged value model
//! - Document: the canonical JSON-object pivot
//! - UpdateMap: "set field to value" operations derived from an item
//! - KeySchema / TableSchema: primary-key and table descriptors
//! - Limits: nesting and item-size constraints
//! - Error: the pipeline error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod limits;
pub mod table;
pub mod update;
pub mod value;

pub use document::{json_type_name, Document};
pub use error::{AttributeError, Cause, DocumentError, Error, ErrorKind, Result};
pub use limits::{item_size, value_size, LimitError, Limits};
pub use table::{BillingMode, KeyError, KeySchema, TableSchema};
pub use update::{to_update_map, AttributeValueUpdate, UpdateAction, UpdateMap};
pub use value::{AttributeMap, AttributeValue};
