//! Errors reported by identity store clients.
//!
//! These mirror the exception families of the remote service rather than the argument
//! errors of the data source, so a caller can tell "the service said no" apart from
//! "the configuration was wrong".

/// Errors that can occur while talking to an identity store.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The requested resource does not exist.
    #[error("Resource not found: {resource_type} {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// The request was rejected as invalid.
    #[error("Validation exception: {message}")]
    Validation { message: String },

    /// The request conflicts with existing data (e.g. a duplicate user name).
    #[error("Conflict exception: {message}")]
    Conflict { message: String },
}

impl ClientError {
    /// Create a resource not found error.
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}
