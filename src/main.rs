//! tola-share - share links for static blogs.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_share::cli::{self, Cli, Commands};
use tola_share::config::SiteConfig;
use tola_share::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Link { args } => cli::link::run_link(args, &config),
        Commands::Targets { json } => cli::targets::list_targets(*json),
        Commands::Page { args } => cli::page::run_page(args, &config),
    }
}
