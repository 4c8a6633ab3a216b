//! Lookup arguments of the user data source.
//!
//! Arguments arrive in generic form. Parsing applies the argument schema's rules that a
//! configuration engine would normally enforce before the data source runs: exactly one
//! branch inside `alternate_identifier`, and `alternate_identifier` excluding both
//! `filter` and `user_id`.

use crate::attributes::{AttributeMap, block_list, optional_string, single_block};
use crate::data_source::UserDataSourceConfig;
use crate::error::{FlexError, FlexResult};
use crate::flex::expand_alternate_identifier;
use crate::types::{AlternateIdentifier, Filter};

/// Parsed, validated lookup arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub identity_store_id: String,
    pub selector: UserSelector,
}

/// How a query selects its user.
#[derive(Debug, Clone, PartialEq)]
pub enum UserSelector {
    /// Resolve the identifier to a user id, then describe that user.
    AlternateIdentifier(AlternateIdentifier),
    /// List users matching the filter, optionally narrowed to one user id.
    Filter {
        filter: Filter,
        user_id: Option<String>,
    },
    /// Describe the user directly.
    UserId(String),
}

impl UserQuery {
    /// Parse and validate lookup arguments.
    pub fn from_attributes(args: &AttributeMap, config: &UserDataSourceConfig) -> FlexResult<Self> {
        let identity_store_id = optional_string(args, "identity_store_id")
            .or_else(|| config.default_identity_store_id.clone())
            .ok_or_else(|| FlexError::missing_required("identity_store_id"))?;
        let user_id = optional_string(args, "user_id");
        let filter_block = single_block(args, "filter")?;
        let alternate_block = single_block(args, "alternate_identifier")?;

        if let Some(block) = alternate_block {
            let has_external_id = has_elements(block, "external_id")?;
            let has_unique_attribute = has_elements(block, "unique_attribute")?;

            if has_external_id && has_unique_attribute {
                return Err(FlexError::invalid_combination(
                    "only one of `alternate_identifier.0.external_id,alternate_identifier.0.unique_attribute` can be specified",
                ));
            }
            if !has_external_id && !has_unique_attribute {
                return Err(FlexError::invalid_combination(
                    "one of `alternate_identifier.0.external_id,alternate_identifier.0.unique_attribute` must be specified",
                ));
            }
            if filter_block.is_some() {
                return Err(FlexError::conflicting("alternate_identifier", "filter"));
            }
            if user_id.is_some() {
                return Err(FlexError::conflicting("alternate_identifier", "user_id"));
            }
        }

        let filter = filter_block.map(expand_filter).transpose()?;
        let alternate_identifier = expand_alternate_identifier(alternate_block)?;

        let selector = match (alternate_identifier, filter, user_id) {
            (Some(identifier), _, _) => UserSelector::AlternateIdentifier(identifier),
            (None, Some(filter), user_id) => UserSelector::Filter { filter, user_id },
            (None, None, Some(user_id)) => UserSelector::UserId(user_id),
            (None, None, None) => {
                return Err(FlexError::invalid_combination(
                    "one of `alternate_identifier,filter,user_id` must be specified",
                ));
            }
        };

        Ok(Self {
            identity_store_id,
            selector,
        })
    }
}

fn has_elements(block: &AttributeMap, key: &str) -> FlexResult<bool> {
    Ok(block_list(block, key)?.is_some_and(|items| !items.is_empty()))
}

fn expand_filter(block: &AttributeMap) -> FlexResult<Filter> {
    let attribute_path = optional_string(block, "attribute_path")
        .ok_or_else(|| FlexError::missing_required("filter.0.attribute_path"))?;
    let attribute_value = optional_string(block, "attribute_value")
        .ok_or_else(|| FlexError::missing_required("filter.0.attribute_value"))?;

    Ok(Filter {
        attribute_path,
        attribute_value,
    })
}
