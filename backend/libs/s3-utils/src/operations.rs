/// S3-backed object reads and writes
use crate::error::{StorageError, StorageResult};
use crate::{ObjectStore, PutObject};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct S3Operations {
    client: Arc<Client>,
}

impl S3Operations {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Operations {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Get {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Body {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?
            .into_bytes();

        debug!(bucket = %bucket, key = %key, bytes = body.len(), "Object downloaded");
        Ok(body)
    }

    async fn put_object(&self, bucket: &str, object: PutObject) -> StorageResult<()> {
        let size = object.body.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(&object.key)
            .content_type(object.content_type)
            .cache_control(object.cache_control)
            .body(ByteStream::from(object.body))
            .send()
            .await
            .map_err(|e| StorageError::Put {
                bucket: bucket.to_string(),
                key: object.key.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(bucket = %bucket, key = %object.key, bytes = size, "Object uploaded");
        Ok(())
    }
}
