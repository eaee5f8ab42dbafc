//! Markdown frontmatter and title extraction.

use anyhow::{Result, anyhow};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::PageMeta;

/// Markdown metadata extractor for YAML (`---`) or TOML (`+++`) frontmatter
pub struct MetaExtractor;

impl MetaExtractor {
    /// Extract frontmatter and return (metadata, body).
    pub fn extract_frontmatter<'a>(&self, content: &'a str) -> Result<Option<(PageMeta, &'a str)>> {
        match Self::detect_frontmatter(content) {
            Some((fm, body, is_toml)) => {
                let meta = if is_toml {
                    Self::parse_toml(fm)?
                } else {
                    Self::parse_yaml_like(fm)
                };
                Ok(Some((meta, body)))
            }
            None => Ok(None),
        }
    }

    /// Parse simple YAML-like frontmatter (`key: value`).
    ///
    /// Tags accept `a, b` or `[a, b]`. Unknown keys are ignored.
    fn parse_yaml_like(content: &str) -> PageMeta {
        let mut meta = PageMeta::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());

            match key.trim().to_lowercase().as_str() {
                "title" => meta.title = Some(value.to_string()),
                "summary" => meta.summary = Some(value.to_string()),
                "date" => meta.date = Some(value.to_string()),
                "permalink" => meta.permalink = Some(value.to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "share" => meta.share = !value.eq_ignore_ascii_case("false"),
                "tags" => {
                    meta.tags = value
                        .trim_start_matches('[')
                        .trim_end_matches(']')
                        .split(',')
                        .map(|s| unquote(s.trim()).to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                _ => {}
            }
        }

        meta
    }

    /// Parse TOML frontmatter.
    fn parse_toml(content: &str) -> Result<PageMeta> {
        toml::from_str(content).map_err(|e| anyhow!("Invalid TOML frontmatter: {}", e))
    }

    /// Detect and extract frontmatter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if trimmed.starts_with(fence)
                && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
            {
                let fm = trimmed[3..3 + end].trim();
                let body = trimmed[3 + end + 4..].trim_start_matches(['\r', '\n']);
                return Some((fm, body, is_toml));
            }
        }

        None
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Plain text of the first heading in a markdown body.
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }

    None
}
