//! Command-line interface module.

mod args;
pub mod common;
pub mod link;
pub mod page;
pub mod targets;

pub use args::{Cli, Commands, LinkArgs, PageArgs};
