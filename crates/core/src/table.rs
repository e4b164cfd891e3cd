//! Table and primary-key descriptors
//!
//! These are the runtime form of a record's storage annotations: which
//! attributes make up the primary key, the table name, and how the table
//! is billed. The conversion pipelines never read them; they back the key
//! helpers used when building get/update/delete requests.

use crate::value::{AttributeMap, AttributeValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary key layout of a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySchema {
    /// Partition (hash) key attribute name
    pub partition_key: String,
    /// Optional sort (range) key attribute name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
}

impl KeySchema {
    /// Key schema with only a partition key
    pub fn partition(name: impl Into<String>) -> Self {
        Self {
            partition_key: name.into(),
            sort_key: None,
        }
    }

    /// Key schema with a partition key and a sort key
    pub fn composite(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition_key: partition.into(),
            sort_key: Some(sort.into()),
        }
    }

    /// Attribute names that make up the key, partition key first
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.partition_key.as_str()).chain(self.sort_key.as_deref())
    }

    /// Extract the primary key attributes from an item.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Missing` if a key attribute is absent and
    /// `KeyError::InvalidType` if it is not a string, number or binary.
    pub fn key_of(&self, item: &AttributeMap) -> Result<AttributeMap, KeyError> {
        let mut key = AttributeMap::with_capacity(2);
        for name in self.attribute_names() {
            let value = item
                .get(name)
                .ok_or_else(|| KeyError::Missing(name.to_string()))?;
            match value {
                AttributeValue::String(_) | AttributeValue::Number(_) | AttributeValue::Binary(_) => {
                    key.insert(name.to_string(), value.clone());
                }
                other => {
                    return Err(KeyError::InvalidType {
                        attribute: name.to_string(),
                        tag: other.tag(),
                    })
                }
            }
        }
        Ok(key)
    }
}

/// How a table is billed for throughput
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BillingMode {
    /// On-demand capacity
    #[default]
    PayPerRequest,
    /// Fixed read and write capacity units
    Provisioned {
        /// Read capacity units
        read_capacity: u64,
        /// Write capacity units
        write_capacity: u64,
    },
}

/// Storage descriptor of a record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub table_name: String,
    /// Primary key layout
    pub key_schema: KeySchema,
    /// Billing mode
    #[serde(default)]
    pub billing_mode: BillingMode,
}

impl TableSchema {
    /// Create a pay-per-request table descriptor
    pub fn new(table_name: impl Into<String>, key_schema: KeySchema) -> Self {
        Self {
            table_name: table_name.into(),
            key_schema,
            billing_mode: BillingMode::PayPerRequest,
        }
    }

    /// Set the billing mode
    pub fn with_billing_mode(mut self, billing_mode: BillingMode) -> Self {
        self.billing_mode = billing_mode;
        self
    }
}

/// Primary key extraction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key attribute is absent from the item
    #[error("key attribute missing: {0}")]
    Missing(String),

    /// Key attribute has a type keys cannot hold
    #[error("key attribute {attribute} has type {tag}, expected S, N or B")]
    InvalidType {
        /// Attribute name
        attribute: String,
        /// Wire tag of the offending value
        tag: &'static str,
    },
}
