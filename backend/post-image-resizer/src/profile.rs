//! Size profiles for post images
//!
//! Every original produces one WebP variant per profile. Both profiles are 4:3
//! so list and detail views crop identically.

/// WebP quality (0-100)
pub const OUTPUT_QUALITY: f32 = 85.0;

/// Extension appended to derived keys
pub const OUTPUT_EXTENSION: &str = "webp";

pub const OUTPUT_CONTENT_TYPE: &str = "image/webp";

/// Derived objects never change once written, so CDNs may cache them for a year
pub const OUTPUT_CACHE_CONTROL: &str = "max-age=31536000";

/// A named target size for one derived variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizeProfile {
    pub const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Dimensions rendered as `<width>x<height>`
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Feed list thumbnail
pub const THUMBNAIL: SizeProfile = SizeProfile::new("thumbnail", 800, 600);

/// Post detail view
pub const DETAIL: SizeProfile = SizeProfile::new("detail", 1920, 1440);

/// Profiles in processing order
pub const SIZE_PROFILES: [SizeProfile; 2] = [THUMBNAIL, DETAIL];
