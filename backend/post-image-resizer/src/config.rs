/// Configuration for the post image resizer
///
/// Loaded from the function's environment variables. Prefixes fall back to
/// the post image layout when unset or empty.
use serde::Deserialize;

pub const DEFAULT_SOURCE_PREFIX: &str = "posts/images/originals/";
pub const DEFAULT_DESTINATION_PREFIX: &str = "posts/images/resized/";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResizerConfig {
    /// Only notifications from this bucket are processed (`BUCKET_NAME`)
    pub bucket_name: String,
    /// Originals live under this prefix (`SOURCE_PREFIX`)
    #[serde(default = "default_source_prefix")]
    pub source_prefix: String,
    /// Variants are written under this prefix (`DESTINATION_PREFIX`)
    #[serde(default = "default_destination_prefix")]
    pub destination_prefix: String,
}

fn default_source_prefix() -> String {
    DEFAULT_SOURCE_PREFIX.to_string()
}

fn default_destination_prefix() -> String {
    DEFAULT_DESTINATION_PREFIX.to_string()
}

impl ResizerConfig {
    /// Config for `bucket_name` with the default prefixes
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            source_prefix: default_source_prefix(),
            destination_prefix: default_destination_prefix(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, envy::Error> {
        let mut config: Self = envy::from_env()?;

        if config.source_prefix.is_empty() {
            config.source_prefix = default_source_prefix();
        }
        if config.destination_prefix.is_empty() {
            config.destination_prefix = default_destination_prefix();
        }

        Ok(config)
    }
}
