//! Page routes and canonical URLs.
//!
//! - Route: decoded URL path, always with leading and trailing `/`
//! - Canonical URL: site URL joined with the route, percent-encoded by `url`

use std::path::{Component, Path};

use crate::config::SlugMode;

/// Characters removed from path segments in `safe` and `ascii` modes.
const UNSAFE_CHARS: &[char] = &[
    '?', '#', '%', '&', '/', '\\', ':', '*', '"', '\'', '<', '>', '|', '[', ']', '{', '}', '^',
    '`', '=', '+', ',', ';', '!', '@', '$', '(', ')',
];

/// Slugify one path segment.
pub fn slugify(segment: &str, mode: SlugMode) -> String {
    let source = match mode {
        SlugMode::No => return segment.to_string(),
        SlugMode::Ascii => deunicode::deunicode(segment),
        SlugMode::Safe => segment.to_string(),
    };

    let mut slug = String::with_capacity(source.len());
    for c in source.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if !UNSAFE_CHARS.contains(&c) && !c.is_control() {
            slug.extend(c.to_lowercase());
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Route for a content file: path relative to `content_dir`, extension
/// dropped, `index` segments removed, each segment slugified.
///
/// `content/posts/Hello World.md` -> `/posts/hello-world/`
pub fn route_for(file: &Path, content_dir: &Path, mode: SlugMode) -> String {
    let rel = file.strip_prefix(content_dir).unwrap_or(file);
    let stem = rel.with_extension("");

    let mut route = String::from("/");
    for component in stem.components() {
        if let Component::Normal(s) = component {
            let s = s.to_string_lossy();
            if s == "index" {
                continue;
            }
            let slug = slugify(&s, mode);
            if !slug.is_empty() {
                route.push_str(&slug);
                route.push('/');
            }
        }
    }

    route
}

/// Normalize a frontmatter permalink: add leading and trailing `/`,
/// drop query, fragment, `.` and `..` segments.
pub fn normalize_permalink(permalink: &str) -> String {
    let path = permalink
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let segments: Vec<&str> = route_segments(path).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Append a route onto the site URL, one percent-encoded segment at a time.
///
/// The site URL's own path acts as prefix:
/// `https://example.github.io/blog` + `/posts/a/` -> `https://example.github.io/blog/posts/a/`
///
/// Route segments never become query, fragment or parent references.
pub fn canonical_url(site_url: &str, route: &str) -> Result<String, url::ParseError> {
    let mut url = url::Url::parse(site_url)?;
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(route_segments(route))
        .push("");

    Ok(url.into())
}

/// Non-empty path segments, without `.` and `..`.
fn route_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
}
