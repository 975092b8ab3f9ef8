//! Error types for object storage operations

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while reading or writing objects
#[derive(Error, Debug)]
pub enum StorageError {
    /// GetObject request failed (missing key, access denied, network)
    #[error("Failed to get s3://{bucket}/{key}: {message}")]
    Get {
        bucket: String,
        key: String,
        message: String,
    },

    /// Object body stream broke off while being collected
    #[error("Failed to read body of s3://{bucket}/{key}: {message}")]
    Body {
        bucket: String,
        key: String,
        message: String,
    },

    /// PutObject request failed
    #[error("Failed to put s3://{bucket}/{key}: {message}")]
    Put {
        bucket: String,
        key: String,
        message: String,
    },
}
