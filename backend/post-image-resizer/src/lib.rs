//! Post Image Resizer
//!
//! Lambda function subscribed to post image uploads. Every original stored
//! under the source prefix is rendered into a fixed set of WebP size variants
//! written under the destination prefix of the same bucket.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod naming;
pub mod processor;
pub mod profile;

// Public re-exports
pub use config::ResizerConfig;
pub use error::{ResizeError, Result};
pub use event::{HandlerResponse, ResizeSummary, S3UploadEvent, VariantResult};
pub use handler::{function_handler, ResizeHandler};
pub use processor::{ImageProcessor, RenderedVariant};
pub use profile::{SizeProfile, SIZE_PROFILES};
