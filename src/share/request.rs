//! Share request: what is being shared.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::RequestError;

/// Input bundle for a share link.
///
/// Immutable once built; construct a fresh one per page.
///
/// # Example
/// ```
/// use tola_share::share::ShareRequest;
///
/// let request = ShareRequest::new("https://example.com/post")
///     .with_text("Hello World")
///     .with_tags(["rust", "blog"]);
/// assert_eq!(request.text(), "Hello World");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    url: String,
    text: String,
    tags: Vec<String>,
}

impl ShareRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Text to share, or `None` when empty or whitespace-only.
    pub(crate) fn share_text(&self) -> Option<&str> {
        (!self.text.trim().is_empty()).then_some(self.text.as_str())
    }

    /// Validate the URL and return it with surrounding whitespace removed.
    ///
    /// The URL is shared as given, so input the WHATWG parser would
    /// silently repair is rejected instead.
    ///
    /// # Checks
    /// - not empty
    /// - no whitespace, control characters or `\`
    /// - parses as an absolute URL
    /// - scheme is `http` or `https`, followed by `//`
    /// - has a host
    pub fn validate(&self) -> Result<&str, RequestError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(RequestError::MissingUrl);
        }

        if let Some(ch) = url
            .chars()
            .find(|&c| c.is_ascii_whitespace() || c.is_control() || c == '\\')
        {
            return Err(RequestError::IllegalCharacter {
                url: url.to_string(),
                ch,
            });
        }

        let parsed = url::Url::parse(url).map_err(|source| RequestError::MalformedUrl {
            url: url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RequestError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        let after_scheme = url.get(parsed.scheme().len() + 1..).unwrap_or_default();
        if !after_scheme.starts_with("//") {
            return Err(RequestError::MissingAuthority {
                url: url.to_string(),
            });
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(RequestError::MissingHost {
                url: url.to_string(),
            });
        }

        Ok(url)
    }

    /// Normalized hashtags joined with `,`, or `None` when there are none.
    ///
    /// Strips a leading `#`, removes whitespace and commas, drops empty
    /// tags and keeps only the first occurrence of each.
    pub(crate) fn hashtags(&self) -> Option<String> {
        let mut seen = FxHashSet::default();
        let tags: Vec<String> = self
            .tags
            .iter()
            .map(|tag| {
                tag.trim()
                    .trim_start_matches('#')
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != ',')
                    .collect::<String>()
            })
            .filter(|tag| !tag.is_empty())
            .filter(|tag| seen.insert(tag.clone()))
            .collect();

        (!tags.is_empty()).then(|| tags.join(","))
    }
}
