//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Blog"
//! author = "Alice"
//! url = "https://myblog.com/blog"
//!
//! [site.share]
//! targets = ["twitter", "reddit", "hackernews"]
//! hashtags = ["rust"]
//! ```

use serde::{Deserialize, Serialize};

use super::ShareConfig;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site section: metadata plus share widget settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, url, ...)
    pub info: SiteInfoConfig,

    /// Share widget settings.
    pub share: ShareConfig,
}

/// `[site.info]`: basic site information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    pub title: String,
    pub author: String,
    pub description: String,

    /// Site URL; its path acts as prefix for page routes
    /// (e.g., "https://example.github.io/blog").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.info.url");

    /// Validate site information.
    ///
    /// # Checks
    /// - If `url_required`, `url` must be set
    /// - `url` must be an http(s) URL with a host
    pub fn validate(&self, url_required: bool, diag: &mut ConfigDiagnostics) {
        if url_required && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "{} is enabled but {} is not configured",
                    ShareConfig::ENABLE,
                    Self::URL
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.warn(Self::URL, "query and fragment are ignored in page URLs");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.language, "en");
        assert!(config.site.info.url.is_none());
    }

    #[test]
    fn test_url_required() {
        let info = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_url_invalid() {
        for bad in ["example.com", "ftp://example.com", "not a url"] {
            let info = SiteInfoConfig {
                url: Some(bad.into()),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            info.validate(false, &mut diag);
            assert!(diag.has_errors(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_url_valid() {
        let info = SiteInfoConfig {
            url: Some("https://example.github.io/blog".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_url_query_warns() {
        let info = SiteInfoConfig {
            url: Some("https://example.com/?ref=x".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
