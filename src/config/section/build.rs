//! `[build]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URL slug generation mode for page routes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Lowercase, whitespace to `-`, URL-hostile characters removed, Unicode kept (default).
    #[default]
    Safe,
    /// Like `safe`, but Unicode is transliterated to ASCII first.
    Ascii,
    /// No modification; preserve original file names.
    No,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (relative to site root).
    pub content: PathBuf,
    /// Slug mode for routes derived from file paths.
    pub slug: SlugMode,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            slug: SlugMode::Safe,
        }
    }
}
