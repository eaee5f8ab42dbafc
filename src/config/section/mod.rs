//! Configuration section definitions.
//!
//! | Module  | TOML Section    | Purpose                              |
//! |---------|-----------------|--------------------------------------|
//! | `site`  | `[site.info]`   | Site metadata, canonical site URL    |
//! | `share` | `[site.share]`  | Share targets, hashtags, markup      |
//! | `build` | `[build]`       | Content directory, slug mode         |

mod build;
mod share;
mod site;

pub use build::{BuildSectionConfig, SlugMode};
pub use share::ShareConfig;
pub use site::{SiteInfoConfig, SiteSectionConfig};
