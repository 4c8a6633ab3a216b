//! Attribute projection between generic records and identity store API records.
//!
//! Every record type has a *flatten* function (API record to [`AttributeMap`]) and an
//! *expand* function (the inverse). The conventions are the same throughout:
//!
//! - absent input produces absent output, never an empty record;
//! - optional strings are only emitted when set, and only read when non-empty;
//! - flattening an empty list produces `None`, so "not set" stays distinct from "set to
//!   nothing";
//! - expanding a list skips elements that are not well-formed records.
//!
//! ```rust
//! use identitystore_flex::flex::{expand_address, flatten_address};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = json!({"country": "US", "primary": true});
//! let address = expand_address(record.as_object())?.expect("record is present");
//! assert_eq!(address.country(), Some("US"));
//!
//! let flattened = flatten_address(Some(&address)).expect("address is present");
//! assert_eq!(flattened.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`AttributeMap`]: crate::attributes::AttributeMap

mod address;
mod external_id;
mod unique_attribute;
mod user;

pub use address::{
    expand_address, expand_addresses, expand_addresses_with, flatten_address, flatten_addresses,
};
pub use external_id::{
    expand_external_id, expand_external_ids, expand_external_ids_with, flatten_external_id,
    flatten_external_ids,
};
pub use unique_attribute::{
    expand_alternate_identifier, expand_unique_attribute, flatten_alternate_identifier,
    flatten_unique_attribute,
};
pub use user::{
    USER_ATTRIBUTE_KEYS, flatten_email, flatten_emails, flatten_name, flatten_user,
};

use crate::attributes::{AttributeMap, type_name};
use crate::error::{FlexError, FlexResult};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do with a list element that cannot be expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedElementPolicy {
    /// Drop the element and log a warning.
    #[default]
    Skip,
    /// Fail the whole expansion.
    Reject,
}

/// Options controlling list expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    pub on_malformed: MalformedElementPolicy,
}

impl ExpandOptions {
    /// Options that fail on the first malformed element.
    pub fn strict() -> Self {
        Self {
            on_malformed: MalformedElementPolicy::Reject,
        }
    }
}

/// The outcome of expanding a list of generic records.
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpansion<T> {
    pub items: Vec<T>,
    /// Number of elements dropped as malformed.
    pub skipped: usize,
}

impl<T> ListExpansion<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            skipped: 0,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Expand every element of `list` with `expand`, applying the malformed element policy.
pub(crate) fn expand_list<T, F>(
    attribute: &str,
    list: &[Value],
    options: &ExpandOptions,
    expand: F,
) -> FlexResult<ListExpansion<T>>
where
    F: Fn(&AttributeMap) -> FlexResult<T>,
{
    let mut expansion = ListExpansion::with_capacity(list.len());

    for (index, element) in list.iter().enumerate() {
        let outcome = match element {
            Value::Object(map) => expand(map).map_err(|e| e.to_string()),
            other => Err(format!("expected object, got {}", type_name(other))),
        };

        match outcome {
            Ok(item) => expansion.items.push(item),
            Err(reason) => match options.on_malformed {
                MalformedElementPolicy::Skip => {
                    warn!("Skipping element {} of '{}': {}", index, attribute, reason);
                    expansion.skipped += 1;
                }
                MalformedElementPolicy::Reject => {
                    return Err(FlexError::MalformedElement {
                        attribute: attribute.to_string(),
                        index,
                        reason,
                    });
                }
            },
        }
    }

    Ok(expansion)
}

/// Flatten every item, mapping an empty slice to `None`.
pub(crate) fn flatten_list<T, F>(items: &[T], flatten: F) -> Option<Vec<Value>>
where
    F: Fn(&T) -> Option<AttributeMap>,
{
    if items.is_empty() {
        return None;
    }

    Some(
        items
            .iter()
            .filter_map(|item| flatten(item).map(Value::Object))
            .collect(),
    )
}
