//! Post Image Resizer - Lambda bootstrap
//!
//! Environment variables:
//! - BUCKET_NAME: bucket whose uploads are resized (required)
//! - SOURCE_PREFIX: key prefix of originals (default: "posts/images/originals/")
//! - DESTINATION_PREFIX: key prefix for variants (default: "posts/images/resized/")
//! - AWS_REGION: S3 region (default: "ap-northeast-2")
//! - S3_ENDPOINT / S3_FORCE_PATH_STYLE: local S3 emulator overrides
//! - RUST_LOG: log filter (default: "post_image_resizer=info,s3_utils=info")

use anyhow::Context;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use post_image_resizer::{function_handler, ResizeHandler, ResizerConfig, S3UploadEvent};
use s3_utils::S3Client;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    // JSON lines for CloudWatch Logs
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("post_image_resizer=info,s3_utils=info")
            }),
        )
        .init();

    let config = ResizerConfig::from_env()
        .context("Failed to load resizer configuration (BUCKET_NAME must be set)")?;
    info!(
        bucket = %config.bucket_name,
        source_prefix = %config.source_prefix,
        destination_prefix = %config.destination_prefix,
        "Configuration loaded"
    );

    let s3 = S3Client::new().await;
    let handler = ResizeHandler::new(Arc::new(s3.operations()), config);

    info!(region = %s3.config().region, "Starting post image resizer");
    run(service_fn(|event: LambdaEvent<S3UploadEvent>| {
        function_handler(event, &handler)
    }))
    .await
}
