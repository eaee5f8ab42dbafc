//! Markdown pages: metadata, routes and canonical URLs.

mod frontmatter;
mod meta;
mod route;

pub use frontmatter::{MetaExtractor, first_heading};
pub use meta::PageMeta;
pub use route::{canonical_url, normalize_permalink, route_for, slugify};
