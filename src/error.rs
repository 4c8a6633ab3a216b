//! Error types for attribute projection and user lookups.
//!
//! Projection itself is close to infallible: absent input maps to absent output and
//! malformed list elements are skipped. The variants here cover the remaining contract
//! violations (a missing `primary` flag, a nested block of the wrong shape) and the
//! argument validation performed by the user data source.

use crate::client::ClientError;

/// Main error type for projection and data source operations.
#[derive(Debug, thiserror::Error)]
pub enum FlexError {
    /// Required attribute is missing from a generic record
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute value doesn't match the expected shape
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// A list element could not be projected and the policy forbids skipping it
    #[error("Element {index} of '{attribute}' is malformed: {reason}")]
    MalformedElement {
        attribute: String,
        index: usize,
        reason: String,
    },

    /// Arguments that must appear exactly once (or at least once) were misused
    #[error("Invalid combination of arguments: {message}")]
    InvalidCombination { message: String },

    /// Two arguments were set that cannot be used together
    #[error("Conflicting configuration arguments: '{attribute}' conflicts with '{conflicts_with}'")]
    ConflictingArguments {
        attribute: String,
        conflicts_with: String,
    },

    /// The lookup matched nothing
    #[error("no {resource} found matching criteria")]
    NotFound { resource: String },

    /// The lookup matched more than one record
    #[error("multiple {resource}s ({count}) found matching criteria; try different search")]
    MultipleResults { resource: String, count: usize },

    /// Errors from the identity store client
    #[error("Identity store client error: {0}")]
    Client(#[from] ClientError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlexError {
    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid attribute type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid combination error
    pub fn invalid_combination(message: impl Into<String>) -> Self {
        Self::InvalidCombination {
            message: message.into(),
        }
    }

    /// Create a conflicting arguments error
    pub fn conflicting(attribute: impl Into<String>, conflicts_with: impl Into<String>) -> Self {
        Self::ConflictingArguments {
            attribute: attribute.into(),
            conflicts_with: conflicts_with.into(),
        }
    }

    /// Create a not found error for the given resource label
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

pub type FlexResult<T> = Result<T, FlexError>;
