//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the persistence layer.
///
/// All of these are recoverable at the call site: a failed read falls
/// back to the absent case and a failed write leaves in-memory state
/// authoritative.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store is missing or rejected the operation.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
