//! Error types for the CRM core library.

use thiserror::Error;

/// Comprehensive error type for all CRM operations.
///
/// The taxonomy mirrors how failures surface to the user:
/// [`CrmError::NotFound`] and [`CrmError::Transport`] are recoverable service
/// failures handled at the store boundary (rollback plus toast), while
/// [`CrmError::InvalidInput`] blocks an operation before any service call is
/// made.
#[derive(Error, Debug)]
pub enum CrmError {
    /// Target entity vanished between client state and the backend
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Network error or non-2xx response without a recoverable meaning
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Client-side validation failures, raised before any service call
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Bearer token could not be resolved to a known user
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl CrmError {
    /// Creates a not-found error for the given entity kind and id.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a transport error with a message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error denotes a missing entity (HTTP 404 analogue).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for CRM operations
pub type Result<T> = std::result::Result<T, CrmError>;
