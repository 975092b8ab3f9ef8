//! Key derivation for resized objects

use crate::profile::{SizeProfile, OUTPUT_EXTENSION};

/// File name of `key` without its directory and final extension.
///
/// Names with no extension, or nothing before the dot (`.png`), are kept whole.
pub fn base_filename(key: &str) -> &str {
    let filename = key.rsplit('/').next().unwrap_or(key);

    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

/// `<prefix><profile>/<base>.webp`
pub fn destination_key(prefix: &str, profile: &SizeProfile, base: &str) -> String {
    format!("{}{}/{}.{}", prefix, profile.name, base, OUTPUT_EXTENSION)
}
