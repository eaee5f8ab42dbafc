//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Share link builder for static blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: tola.toml)
    #[arg(short = 'C', long, global = true, default_value = "tola.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build one share link
    #[command(visible_alias = "l")]
    Link {
        #[command(flatten)]
        args: LinkArgs,
    },

    /// List supported share targets
    #[command(visible_alias = "t")]
    Targets {
        /// Output JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Build share links for content pages
    #[command(visible_alias = "p")]
    Page {
        #[command(flatten)]
        args: PageArgs,
    },
}

/// Link command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Target name (e.g. reddit, twitter, hn)
    pub target: String,

    /// Absolute http(s) URL of the page to share
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: String,

    /// Share text, usually the page title
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Hashtag (repeatable, `#` prefix optional)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Output a JSON object instead of the bare link
    #[arg(short, long, conflicts_with = "html")]
    pub json: bool,

    /// Output an HTML anchor instead of the bare link
    #[arg(long)]
    pub html: bool,
}

/// Page command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Files or directories to scan. If omitted, scans all content.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output an HTML share bar per page instead of JSON
    #[arg(long)]
    pub html: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Include draft pages
    #[arg(short, long)]
    pub drafts: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override site URL, e.g. for CI previews.
    ///
    /// The path component acts as prefix for subdirectory deployments:
    ///   tola-share page --site-url "https://example.github.io/blog"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,
}

impl Cli {
    /// Whether the command cannot run without a config file.
    pub const fn needs_config(&self) -> bool {
        matches!(self.command, Commands::Page { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_link() {
        let cli = Cli::try_parse_from([
            "tola-share",
            "link",
            "hn",
            "--url",
            "https://example.com/a",
            "--text",
            "Hello",
            "--tag",
            "rust",
            "--tag",
            "#web",
        ])
        .unwrap();

        let Commands::Link { args } = cli.command else {
            panic!("expected link command");
        };
        assert_eq!(args.target, "hn");
        assert_eq!(args.url, "https://example.com/a");
        assert_eq!(args.text, "Hello");
        assert_eq!(args.tags, vec!["rust", "#web"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_link_json_conflicts_with_html() {
        let result = Cli::try_parse_from([
            "tola-share", "link", "reddit", "-u", "https://example.com", "--json", "--html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_page_with_globals() {
        let cli = Cli::try_parse_from([
            "tola-share",
            "p",
            "posts",
            "--verbose",
            "-C",
            "site/tola.toml",
            "-U",
            "https://preview.example.com",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.needs_config());
        assert_eq!(cli.config, PathBuf::from("site/tola.toml"));
        let Commands::Page { args } = cli.command else {
            panic!("expected page command");
        };
        assert_eq!(args.paths, vec![PathBuf::from("posts")]);
        assert_eq!(args.site_url.as_deref(), Some("https://preview.example.com"));
    }

    #[test]
    fn test_targets_does_not_need_config() {
        let cli = Cli::try_parse_from(["tola-share", "targets", "--json"]).unwrap();
        assert!(!cli.needs_config());
        assert_eq!(cli.config, PathBuf::from("tola.toml"));
    }
}
