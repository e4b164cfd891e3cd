//! Partial-update maps
//!
//! An update map expresses "set field to value" for every attribute of an
//! item, the shape a store's update-item request expects.

use crate::value::{AttributeMap, AttributeValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to update operation.
pub type UpdateMap = HashMap<String, AttributeValueUpdate>;

/// Action applied to one attribute by an update.
///
/// Update maps only ever set attributes, so `Put` is the only action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpdateAction {
    /// Set the attribute to the value, replacing any previous one
    Put,
}

/// One update operation: a value and the action to apply with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueUpdate {
    /// The attribute value
    pub value: AttributeValue,
    /// The action to perform
    pub action: UpdateAction,
}

impl AttributeValueUpdate {
    /// An update that sets the attribute to `value`
    pub fn put(value: AttributeValue) -> Self {
        Self {
            value,
            action: UpdateAction::Put,
        }
    }
}

/// Translate an item into an update map that sets every attribute.
///
/// Every key of `item` is preserved and every value is wrapped in a
/// [`UpdateAction::Put`] operation. The item is not consumed.
pub fn to_update_map(item: &AttributeMap) -> UpdateMap {
    item.iter()
        .map(|(k, v)| (k.clone(), AttributeValueUpdate::put(v.clone())))
        .collect()
}
