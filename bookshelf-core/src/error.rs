//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all collection operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A payload exists under `key` but is not a valid collection
    #[error("Corrupt payload under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Book not found: {0}")]
    BookNotFound(String),
}

/// Errors raised by the key-value storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}
