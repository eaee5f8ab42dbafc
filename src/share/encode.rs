//! Query-string construction for share endpoints.
//!
//! Values are encoded as URI components: everything except ASCII
//! alphanumerics and the unreserved marks `-`, `_`, `.`, `~` is escaped.
//! Spaces become `%20`, never `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set for a single query component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a string for use as a query name or value.
#[inline]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Incremental `endpoint?name=value&...` builder.
///
/// The endpoint is copied verbatim; names and values are encoded.
#[derive(Debug)]
pub struct QueryBuilder {
    buf: String,
    has_query: bool,
}

impl QueryBuilder {
    pub fn new(endpoint: &str) -> Self {
        Self {
            buf: String::from(endpoint),
            has_query: false,
        }
    }

    /// Append one `name=value` pair.
    pub fn pair(&mut self, name: &str, value: &str) -> &mut Self {
        self.buf.push(if self.has_query { '&' } else { '?' });
        self.buf.push_str(&encode_component(name));
        self.buf.push('=');
        self.buf.push_str(&encode_component(value));
        self.has_query = true;
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
