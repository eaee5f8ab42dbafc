//! tola-share: social share links for static blogs.
//!
//! The [`share`] module builds share URLs for a fixed set of networks;
//! [`page`] and [`config`] turn markdown posts plus `tola.toml` into
//! share requests for the `tola-share` binary.

pub mod cli;
pub mod config;
pub mod logger;
pub mod page;
pub mod share;
pub mod utils;
