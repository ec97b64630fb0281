//! Result and error types for viewtx.

use thiserror::Error;

/// Result type for viewtx operations
pub type ViewTxResult<T> = Result<T, ViewTxError>;

/// Errors that can occur in viewtx
#[derive(Debug, Error)]
pub enum ViewTxError {
    /// Animation name does not match any known kind
    #[error("Unknown animation '{name}'. Expected one of: {expected}")]
    UnknownAnimation {
        /// Name that failed to parse
        name: String,
        /// Comma separated list of accepted names
        expected: String,
    },

    /// Animation duration must be a positive number of milliseconds
    #[error("Invalid duration: {duration_ms}ms (must be greater than zero)")]
    InvalidDuration {
        /// Rejected duration
        duration_ms: u32,
    },

    /// Easing function text was empty
    #[error("Invalid easing function: must not be empty")]
    InvalidEasing,

    /// Transition name was empty
    #[error("Invalid transition name: {reason}")]
    InvalidName {
        /// Why the name was rejected
        reason: String,
    },

    /// The host document refused an operation
    #[error("Host document error: {message}")]
    Host {
        /// Error message
        message: String,
    },

    /// Transition manifest could not be interpreted
    #[error("Manifest error: {message}")]
    Manifest {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ViewTxError {
    /// Create a host document error
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Create a manifest error
    #[must_use]
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }

    /// Create an invalid name error
    #[must_use]
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }
}
