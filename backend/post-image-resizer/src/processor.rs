//! Image processor - renders size-profile variants from an original image
//!
//! Each variant is scaled to cover the profile's box, center-cropped to exactly
//! the profile's width and height, and encoded as lossy WebP.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the async runtime.

use crate::error::{ResizeError, Result};
use crate::profile::{SizeProfile, OUTPUT_QUALITY};
use bytes::Bytes;
use image::imageops::FilterType;
use image::DynamicImage;
use std::sync::Arc;
use tracing::debug;
use webp::Encoder;

/// An encoded variant
#[derive(Debug, Clone)]
pub struct RenderedVariant {
    /// WebP bytes
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Image processor
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    quality: f32,
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(OUTPUT_QUALITY)
    }
}

impl ImageProcessor {
    /// Create a processor encoding at the given WebP quality (0-100)
    pub fn new(quality: f32) -> Self {
        Self { quality }
    }

    /// Decode an image, guessing the format from its content
    pub fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        let img = image::load_from_memory(data)?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Source image decoded"
        );
        Ok(img)
    }

    /// Decode and render one profile (blocking)
    pub fn render(&self, data: &[u8], profile: &SizeProfile) -> Result<RenderedVariant> {
        let img = self.decode(data)?;
        self.render_decoded(&img, profile)
    }

    /// Render one profile from an already decoded image (blocking)
    pub fn render_decoded(
        &self,
        img: &DynamicImage,
        profile: &SizeProfile,
    ) -> Result<RenderedVariant> {
        let resized = img.resize_to_fill(profile.width, profile.height, FilterType::Lanczos3);
        let data = self.encode_webp(&resized)?;

        debug!(
            profile = profile.name,
            width = resized.width(),
            height = resized.height(),
            size = data.len(),
            "Variant rendered"
        );

        Ok(RenderedVariant {
            data,
            width: resized.width(),
            height: resized.height(),
        })
    }

    /// Decode on the blocking thread pool
    pub async fn decode_async(self: Arc<Self>, data: Bytes) -> Result<Arc<DynamicImage>> {
        tokio::task::spawn_blocking(move || self.decode(&data).map(Arc::new)).await?
    }

    /// Render one profile on the blocking thread pool
    pub async fn render_async(
        self: Arc<Self>,
        img: Arc<DynamicImage>,
        profile: SizeProfile,
    ) -> Result<RenderedVariant> {
        tokio::task::spawn_blocking(move || self.render_decoded(&img, &profile)).await?
    }

    /// Encode as lossy WebP, keeping the alpha channel when the source has one
    fn encode_webp(&self, img: &DynamicImage) -> Result<Bytes> {
        let (width, height) = (img.width(), img.height());

        let encoded = if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, self.quality)
        } else {
            let rgb = img.to_rgb8();
            Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, self.quality)
        }
        .map_err(|e| ResizeError::Encode(format!("{e:?}")))?;

        Ok(Bytes::copy_from_slice(&encoded))
    }
}
