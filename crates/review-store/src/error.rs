//! Storage error types.
//!
//! Reads never fail from the caller's point of view (corrupt state loads as
//! empty), so these errors describe failed writes and removals.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Coding data could not be serialized.
    #[error("Failed to serialize coding data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Backend refused the operation.
    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save coding to {}. Your last change was not stored.",
                    target_path.display()
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing coding data for storage.".to_string()
            }
            Self::InvalidKey { key } => format!("The storage key {key:?} is not usable."),
            Self::Unavailable { reason } => format!("Coding storage is unavailable: {reason}"),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the store directory is readable.".into())
                } else {
                    Some("Check that you have permission to write to the store directory.".into())
                }
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different --store-dir.".into())
            }
            Self::Serialization { .. } | Self::InvalidKey { .. } => None,
            Self::Unavailable { .. } => Some("Retry once the storage backend is available.".into()),
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
