//! UniqueAttribute and AlternateIdentifier records of the identity store API.

use crate::document::Document;
use crate::types::ExternalId;
use serde::{Deserialize, Serialize};

/// Selects a user by a uniquely valued attribute, e.g. `UserName` or `Emails.Value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UniqueAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<Document>,
}

impl UniqueAttribute {
    pub fn new(attribute_path: impl Into<String>, attribute_value: impl Into<Document>) -> Self {
        Self {
            attribute_path: Some(attribute_path.into()),
            attribute_value: Some(attribute_value.into()),
        }
    }

    pub fn attribute_path(&self) -> Option<&str> {
        self.attribute_path.as_deref()
    }

    pub fn attribute_value(&self) -> Option<&Document> {
        self.attribute_value.as_ref()
    }
}

/// A way of identifying a user other than its user id.
///
/// Serializes as a single-member union, `{"ExternalId": {...}}` or
/// `{"UniqueAttribute": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlternateIdentifier {
    ExternalId(ExternalId),
    UniqueAttribute(UniqueAttribute),
}

impl AlternateIdentifier {
    pub fn as_external_id(&self) -> Option<&ExternalId> {
        match self {
            Self::ExternalId(value) => Some(value),
            Self::UniqueAttribute(_) => None,
        }
    }

    pub fn as_unique_attribute(&self) -> Option<&UniqueAttribute> {
        match self {
            Self::UniqueAttribute(value) => Some(value),
            Self::ExternalId(_) => None,
        }
    }
}

impl From<ExternalId> for AlternateIdentifier {
    fn from(value: ExternalId) -> Self {
        Self::ExternalId(value)
    }
}

impl From<UniqueAttribute> for AlternateIdentifier {
    fn from(value: UniqueAttribute) -> Self {
        Self::UniqueAttribute(value)
    }
}
