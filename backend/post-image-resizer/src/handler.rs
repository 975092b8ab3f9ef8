//! Resize handler - turns one upload notification into one variant per size profile
//!
//! The workflow for a routed event:
//! 1. Download the original from S3
//! 2. Decode it once
//! 3. For each size profile: cover-resize, encode WebP, upload under the destination prefix
//! 4. Report every stored variant in the response body
//!
//! Failures anywhere in that workflow are reported in the body of a normal
//! response instead of failing the invocation.

use crate::config::ResizerConfig;
use crate::error::Result;
use crate::event::{
    HandlerResponse, ResizeSummary, S3UploadEvent, UploadedObject, VariantResult,
    SKIPPED_WRONG_BUCKET, SKIPPED_WRONG_PATH,
};
use crate::naming::{base_filename, destination_key};
use crate::processor::ImageProcessor;
use crate::profile::{OUTPUT_CACHE_CONTROL, OUTPUT_CONTENT_TYPE, SIZE_PROFILES};
use lambda_runtime::LambdaEvent;
use s3_utils::{ObjectStore, PutObject};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Handler for post image upload notifications
pub struct ResizeHandler<S> {
    store: Arc<S>,
    config: ResizerConfig,
    processor: Arc<ImageProcessor>,
}

impl<S: ObjectStore> ResizeHandler<S> {
    pub fn new(store: Arc<S>, config: ResizerConfig) -> Self {
        Self::with_processor(store, config, ImageProcessor::default())
    }

    pub fn with_processor(store: Arc<S>, config: ResizerConfig, processor: ImageProcessor) -> Self {
        Self {
            store,
            config,
            processor: Arc::new(processor),
        }
    }

    pub fn config(&self) -> &ResizerConfig {
        &self.config
    }

    /// Handle one notification. Always yields a 200 response.
    pub async fn handle(&self, event: S3UploadEvent) -> HandlerResponse {
        debug!(event = ?event, "Event payload");

        let object = match event.first_object() {
            Ok(object) => object,
            Err(e) => {
                error!(error = %e, "Unusable event");
                return HandlerResponse::failure(&e);
            }
        };

        info!(bucket = %object.bucket, key = %object.key, "Event received");

        if let Some(reason) = self.route(&object) {
            info!(
                bucket = %object.bucket,
                key = %object.key,
                expected_bucket = %self.config.bucket_name,
                source_prefix = %self.config.source_prefix,
                "{reason}"
            );
            return HandlerResponse::skipped(reason);
        }

        match self
            .process(&object)
            .await
            .and_then(|summary| HandlerResponse::success(&summary))
        {
            Ok(response) => response,
            Err(e) => {
                error!(
                    bucket = %object.bucket,
                    key = %object.key,
                    error = ?e,
                    "Resize failed: {e}"
                );
                HandlerResponse::failure(&e)
            }
        }
    }

    /// Skip reason when the object is not an original this function owns.
    ///
    /// Variants land outside the source prefix, so their own notifications stop here.
    pub fn route(&self, object: &UploadedObject) -> Option<&'static str> {
        if object.bucket != self.config.bucket_name {
            Some(SKIPPED_WRONG_BUCKET)
        } else if !object.key.starts_with(&self.config.source_prefix) {
            Some(SKIPPED_WRONG_PATH)
        } else {
            None
        }
    }

    /// Resize a routed object into every size profile
    pub async fn process(&self, object: &UploadedObject) -> Result<ResizeSummary> {
        info!(bucket = %object.bucket, key = %object.key, "Downloading original");
        let source = self.store.get_object(&object.bucket, &object.key).await?;
        let original_size = source.len();

        let base = base_filename(&object.key);
        let img = self.processor.clone().decode_async(source).await?;

        let mut results = Vec::with_capacity(SIZE_PROFILES.len());
        for profile in SIZE_PROFILES {
            debug!(
                profile = profile.name,
                dimensions = %profile.dimensions(),
                "Resizing"
            );
            let variant = self
                .processor
                .clone()
                .render_async(img.clone(), profile)
                .await?;

            let key = destination_key(&self.config.destination_prefix, &profile, base);
            let bytes = variant.data.len();

            self.store
                .put_object(
                    &object.bucket,
                    PutObject {
                        key: key.clone(),
                        body: variant.data,
                        content_type: OUTPUT_CONTENT_TYPE.to_string(),
                        cache_control: OUTPUT_CACHE_CONTROL.to_string(),
                    },
                )
                .await?;

            info!(
                profile = profile.name,
                destination_key = %key,
                bytes,
                "Variant stored"
            );

            results.push(VariantResult {
                size: profile.name.to_string(),
                key,
                dimensions: profile.dimensions(),
                bytes,
            });
        }

        info!(
            key = %object.key,
            original_size,
            variants = results.len(),
            "All sizes completed"
        );

        Ok(ResizeSummary {
            original: object.key.clone(),
            original_size,
            results,
        })
    }
}

/// Lambda entry point
pub async fn function_handler<S: ObjectStore>(
    event: LambdaEvent<S3UploadEvent>,
    handler: &ResizeHandler<S>,
) -> std::result::Result<HandlerResponse, lambda_runtime::Error> {
    debug!(request_id = %event.context.request_id, "Invocation started");
    Ok(handler.handle(event.payload).await)
}
