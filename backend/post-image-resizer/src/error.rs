//! Error types for the post image resizer
//!
//! Every variant is absorbed by the handler and reported in the response body;
//! none of them fail the invocation.

use s3_utils::StorageError;
use thiserror::Error;

/// Result type for resizer operations
pub type Result<T> = std::result::Result<T, ResizeError>;

#[derive(Error, Debug)]
pub enum ResizeError {
    /// Notification payload carried nothing usable
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Object storage read or write failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Source bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// WebP encoder rejected the resized frame
    #[error("Failed to encode WebP: {0}")]
    Encode(String),

    /// Blocking image task panicked or was cancelled
    #[error("Image task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}
