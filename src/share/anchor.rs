//! Share anchor and share bar HTML.
//!
//! Anchors open in a new browsing context with `rel="noopener noreferrer"`,
//! so the shared page never gets a handle on the opener window.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::{ShareError, ShareLink, ShareRequest, ShareTarget, build_all};
use crate::utils::html::{escape, escape_attr};

/// Anchor text style.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Network name as anchor text (default).
    #[default]
    Name,
    /// Empty anchor text, for icon-only styling. `aria-label` is kept.
    None,
}

/// Rendering options shared by every anchor of a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOptions {
    /// CSS class prefix: anchors get `{class} {class}-{target}`,
    /// the bar gets `{class}-bar`.
    pub class: String,
    pub labels: LabelStyle,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            class: "share".into(),
            labels: LabelStyle::Name,
        }
    }
}

/// Render one share anchor.
pub fn render_anchor(target: ShareTarget, link: &ShareLink, options: &AnchorOptions) -> String {
    let class = escape_attr(&options.class);
    let label = match options.labels {
        LabelStyle::Name => escape(target.label()),
        LabelStyle::None => "".into(),
    };

    format!(
        r#"<a class="{class} {class}-{name}" href="{href}" target="_blank" rel="noopener noreferrer" aria-label="Share on {aria}">{label}</a>"#,
        name = target.name(),
        href = escape_attr(link.as_str()),
        aria = escape_attr(target.label()),
    )
}

/// Render a `<nav>` with one anchor per target.
///
/// Any build error aborts the whole bar.
pub fn render_bar(
    request: &ShareRequest,
    targets: &[ShareTarget],
    options: &AnchorOptions,
) -> Result<String, ShareError> {
    let links = build_all(targets, request)?;
    Ok(render_links(&links, options))
}

/// Render a `<nav>` from links that are already built.
pub fn render_links(links: &[(ShareTarget, ShareLink)], options: &AnchorOptions) -> String {
    let mut html = String::new();
    let _ = write!(html, r#"<nav class="{}-bar">"#, escape_attr(&options.class));
    for (target, link) in links {
        html.push_str(&render_anchor(*target, link, options));
    }
    html.push_str("</nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::{RequestError, build};

    fn reddit_link() -> ShareLink {
        let req = ShareRequest::new("https://example.com/post").with_text("Hello World");
        build(ShareTarget::Reddit, &req).unwrap()
    }

    #[test]
    fn test_anchor_markup() {
        let html = render_anchor(ShareTarget::Reddit, &reddit_link(), &AnchorOptions::default());
        assert_eq!(
            html,
            r#"<a class="share share-reddit" href="https://www.reddit.com/submit?url=https%3A%2F%2Fexample.com%2Fpost&amp;title=Hello%20World" target="_blank" rel="noopener noreferrer" aria-label="Share on Reddit">Reddit</a>"#
        );
    }

    #[test]
    fn test_anchor_icon_only() {
        let options = AnchorOptions {
            class: "btn".into(),
            labels: LabelStyle::None,
        };
        let html = render_anchor(ShareTarget::Reddit, &reddit_link(), &options);
        assert!(html.contains(r#"class="btn btn-reddit""#));
        assert!(html.contains(r#"aria-label="Share on Reddit""#));
        assert!(html.ends_with("></a>"));
    }

    #[test]
    fn test_anchor_escapes_class() {
        let options = AnchorOptions {
            class: r#"x" onclick="y"#.into(),
            labels: LabelStyle::Name,
        };
        let html = render_anchor(ShareTarget::Reddit, &reddit_link(), &options);
        assert!(!html.contains(r#"" onclick=""#));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_bar() {
        let req = ShareRequest::new("https://example.com/post").with_text("Hi");
        let html = render_bar(
            &req,
            &[ShareTarget::Twitter, ShareTarget::HackerNews],
            &AnchorOptions::default(),
        )
        .unwrap();

        assert!(html.starts_with(r#"<nav class="share-bar">"#));
        assert!(html.ends_with("</nav>"));
        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
        assert!(html.contains(">Hacker News</a>"));
    }

    #[test]
    fn test_links_keep_order() {
        let req = ShareRequest::new("https://example.com/post");
        let links = build_all(&[ShareTarget::Bluesky, ShareTarget::Reddit], &req).unwrap();
        let html = render_links(&links, &AnchorOptions::default());

        let bluesky = html.find("share-bluesky").unwrap();
        let reddit = html.find("share-reddit").unwrap();
        assert!(bluesky < reddit);
        assert_eq!(
            html,
            render_bar(&req, &[ShareTarget::Bluesky, ShareTarget::Reddit], &AnchorOptions::default())
                .unwrap()
        );
    }

    #[test]
    fn test_links_empty() {
        assert_eq!(
            render_links(&[], &AnchorOptions::default()),
            r#"<nav class="share-bar"></nav>"#
        );
    }

    #[test]
    fn test_bar_fails_whole() {
        let req = ShareRequest::new("");
        let err = render_bar(&req, &[ShareTarget::Twitter], &AnchorOptions::default());
        assert!(matches!(
            err,
            Err(ShareError::InvalidRequest(RequestError::MissingUrl))
        ));
    }

    #[test]
    fn test_label_style_serde() {
        let style: LabelStyle = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(style, LabelStyle::None);
    }
}
