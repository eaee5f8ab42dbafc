//! Site configuration management for `tola.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site.info], [site.share], [build]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional for `link` and `targets`; `page` needs it
//! for the site URL and content directory.

pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildSectionConfig, ShareConfig, SiteInfoConfig, SiteSectionConfig, SlugMode,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use util::find_config_file;

use crate::{
    cli::{Cli, Commands, PageArgs},
    debug, log,
    utils::path::{expand_tilde, normalize_path},
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running without one
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, share)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing file is an
    /// error only for commands that need one.
    pub fn load(cli: &Cli) -> Result<Self> {
        let wanted = expand_tilde(&cli.config);

        let mut config = match find_config_file(&wanted) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = normalize_path(&path);
                config
            }
            None if cli.needs_config() => {
                log!(
                    "error";
                    "Config file '{}' not found. Create one with a [site.info] url.",
                    cli.config.display()
                );
                bail!(ConfigError::NotFound(wanted));
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.finalize(cli);
        config.validate(&cli.command)?;
        Ok(config)
    }

    /// Resolve root and content paths, then apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        let root = match self.config_path.parent() {
            Some(parent) if !self.config_path.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir().unwrap_or_default(),
        };
        self.root = normalize_path(&root);

        if let Commands::Page { args } = &cli.command {
            self.apply_page_args(args);
        }

        self.build.content = normalize_path(&self.root.join(&self.build.content));
    }

    /// Apply page arguments from CLI.
    fn apply_page_args(&mut self, args: &PageArgs) {
        Self::update_option(&mut self.build.content, args.content.as_ref());

        // --site-url overrides [site.info] url, e.g. for CI previews
        if let Some(ref url) = args.site_url {
            self.site.info.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Configured site URL, if any.
    pub fn site_url(&self) -> Option<&str> {
        self.site.info.url.as_deref()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, command: &Commands) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        let needs_url = matches!(command, Commands::Page { .. }) && self.site.share.enable;
        self.site.info.validate(needs_url, &mut diag);
        self.site.share.validate(&mut diag);

        if matches!(command, Commands::Page { .. }) && !self.build.content.is_dir() {
            diag.error_with_hint(
                FieldPath::new("build.content"),
                format!(
                    "content directory `{}` does not exist",
                    self.root_relative(&self.build.content).display()
                ),
                "set [build] content, or pass --content",
            );
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
