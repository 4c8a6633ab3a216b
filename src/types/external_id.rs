//! ExternalId record of the identity store API.
//!
//! An external identifier links a user to a record in another system through an
//! issuer/identifier pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier issued by an external system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalId {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl ExternalId {
    /// Create an ExternalId with both parts set.
    pub fn new(id: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            issuer: Some(issuer.into()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// Whether `other` names the same issuer and identifier.
    ///
    /// Both sides must carry both parts; a partially populated identifier never matches.
    pub fn matches(&self, other: &ExternalId) -> bool {
        match (self.id(), self.issuer(), other.id(), other.issuer()) {
            (Some(id), Some(issuer), Some(other_id), Some(other_issuer)) => {
                id == other_id && issuer == other_issuer
            }
            _ => false,
        }
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.issuer().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}
