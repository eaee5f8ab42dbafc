//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted TOML path (e.g. `site.share.targets`) naming a config field.
///
/// Sections expose their fields as associated constants so diagnostics
/// never spell paths by hand:
///
/// ```ignore
/// diag.warn(ShareConfig::TARGETS, "duplicate target `reddit`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
