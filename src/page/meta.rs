//! Page metadata from markdown frontmatter.

use serde::{Deserialize, Serialize};

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Page metadata relevant to sharing.
///
/// | Field       | Type          | Description                          |
/// |-------------|---------------|--------------------------------------|
/// | `title`     | `String`      | Share text                           |
/// | `summary`   | `String`      | Brief description                    |
/// | `date`      | `String`      | Publication date                     |
/// | `draft`     | `bool`        | Draft status (default: false)        |
/// | `tags`      | `Vec<String>` | Hashtags for targets that take them  |
/// | `permalink` | `String`      | Custom URL path (overrides default)  |
/// | `share`     | `bool`        | `false` opts the page out of sharing |
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub draft: bool,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub permalink: Option<String>,
    pub share: bool,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: None,
            summary: None,
            date: None,
            draft: false,
            tags: Vec::new(),
            permalink: None,
            share: true,
        }
    }
}
