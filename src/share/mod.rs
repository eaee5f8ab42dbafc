//! Share link construction.
//!
//! Maps a [`ShareTarget`] and a [`ShareRequest`] to a [`ShareLink`]: the
//! target's endpoint with the request fields percent-encoded into its query.
//!
//! # Module Structure
//!
//! ```text
//! share/
//! ├── target   # ShareTarget + endpoint table
//! ├── request  # ShareRequest + validation
//! ├── encode   # query component encoding
//! ├── anchor   # <a> / share bar rendering
//! └── error    # ShareError, RequestError
//! ```
//!
//! # Empty text
//!
//! Empty (or whitespace-only) text omits the text parameter for every target.
//! Combined `text url` fields fall back to the bare URL.
//!
//! # Example
//!
//! ```
//! use tola_share::share::{ShareRequest, ShareTarget, build};
//!
//! let request = ShareRequest::new("https://example.com/post").with_text("Hello World");
//! let link = build(ShareTarget::Reddit, &request).unwrap();
//! assert_eq!(
//!     link.as_str(),
//!     "https://www.reddit.com/submit?url=https%3A%2F%2Fexample.com%2Fpost&title=Hello%20World"
//! );
//! ```

mod anchor;
mod encode;
mod error;
mod request;
mod target;

pub use anchor::{AnchorOptions, LabelStyle, render_anchor, render_bar, render_links};
pub use encode::encode_component;
pub use error::{RequestError, ShareError};
pub use request::ShareRequest;
pub use target::{Endpoint, Field, ShareTarget};

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use encode::QueryBuilder;

/// Encoded share URL, ready for use as an anchor `href`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShareLink(String);

impl ShareLink {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShareLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShareLink> for String {
    fn from(link: ShareLink) -> Self {
        link.0
    }
}

/// Build the share link for `target`.
///
/// Fails with [`ShareError::InvalidRequest`] when the request URL is missing
/// or not an absolute http(s) URL. Nothing is produced on failure.
pub fn build(target: ShareTarget, request: &ShareRequest) -> Result<ShareLink, ShareError> {
    let url = request.validate()?;
    let endpoint = target.endpoint();

    let mut query = QueryBuilder::new(endpoint.base);
    for &(name, field) in endpoint.params {
        if let Some(value) = field_value(field, url, request) {
            query.pair(name, &value);
        }
    }

    Ok(ShareLink(query.finish()))
}

/// Build a share link from a target name (`"reddit"`, `"x"`, ...).
///
/// Unknown names fail with [`ShareError::InvalidTarget`].
pub fn build_named(name: &str, request: &ShareRequest) -> Result<ShareLink, ShareError> {
    build(name.parse()?, request)
}

/// Build links for several targets, failing on the first error.
pub fn build_all(
    targets: &[ShareTarget],
    request: &ShareRequest,
) -> Result<Vec<(ShareTarget, ShareLink)>, ShareError> {
    targets
        .iter()
        .map(|&target| build(target, request).map(|link| (target, link)))
        .collect()
}

fn field_value<'a>(field: Field, url: &'a str, request: &'a ShareRequest) -> Option<Cow<'a, str>> {
    match field {
        Field::Url => Some(Cow::Borrowed(url)),
        Field::Text => request.share_text().map(Cow::Borrowed),
        Field::Tags => request.hashtags().map(Cow::Owned),
        Field::TextWithUrl => Some(match request.share_text() {
            Some(text) => Cow::Owned(format!("{text} {url}")),
            None => Cow::Borrowed(url),
        }),
    }
}
