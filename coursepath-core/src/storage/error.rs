//! Error types for collaborator reads.

use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading enrollment, catalog or assessment data.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// I/O error while reading a snapshot.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data in the store.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
