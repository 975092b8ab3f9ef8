/// Shared S3 utilities for Nova functions
///
/// Provides the object store abstraction, the AWS S3 client wiring, and the
/// S3-backed implementation used by event-driven media functions.
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;
use tracing::info;

pub mod config;
pub mod error;
pub mod operations;

pub use config::S3Config;
pub use error::{StorageError, StorageResult};
pub use operations::S3Operations;

/// A fully buffered object to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    pub cache_control: String,
}

/// Object storage interface
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Download the whole object body into memory
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<Bytes>;

    /// Write an object, replacing any existing object under the same key
    async fn put_object(&self, bucket: &str, object: PutObject) -> StorageResult<()>;
}

/// Shared S3 client wrapper
#[derive(Clone)]
pub struct S3Client {
    client: Arc<Client>,
    config: S3Config,
}

impl S3Client {
    /// Create new S3 client with configuration from environment
    pub async fn new() -> Self {
        Self::with_config(S3Config::from_env()).await
    }

    /// Create new S3 client with custom configuration
    ///
    /// Credentials come from the default provider chain (Lambda execution
    /// role, environment, profile).
    pub async fn with_config(config: S3Config) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        info!(
            region = %config.region,
            endpoint = ?config.endpoint,
            "S3 client initialized"
        );

        Self {
            client: Arc::new(Client::from_conf(builder.build())),
            config,
        }
    }

    /// Get S3 configuration
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Object operations sharing this client's connection pool
    pub fn operations(&self) -> S3Operations {
        S3Operations::new(self.client.clone())
    }
}
