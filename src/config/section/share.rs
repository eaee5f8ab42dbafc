//! `[site.share]` configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::share::{AnchorOptions, LabelStyle, ShareTarget};

/// Share widget settings.
///
/// `targets` holds raw names so that typos surface as diagnostics
/// instead of TOML parse errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Generate share links for pages.
    pub enable: bool,

    /// Target names, in widget order.
    pub targets: Vec<String>,

    /// Site-wide hashtags, appended after page tags.
    pub hashtags: Vec<String>,

    /// Anchor text style: name | none
    pub labels: LabelStyle,

    /// CSS class prefix for anchors and the bar.
    pub class: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            enable: true,
            targets: ["twitter", "facebook", "linkedin", "reddit"]
                .map(String::from)
                .to_vec(),
            hashtags: Vec::new(),
            labels: LabelStyle::Name,
            class: "share".into(),
        }
    }
}

impl ShareConfig {
    pub const ENABLE: FieldPath = FieldPath::new("site.share.enable");
    pub const TARGETS: FieldPath = FieldPath::new("site.share.targets");
    pub const CLASS: FieldPath = FieldPath::new("site.share.class");

    /// Validate share settings.
    ///
    /// # Checks
    /// - every target name is supported
    /// - at least one target when enabled
    /// - `class` is a single non-empty CSS class
    /// - duplicate targets (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.targets.is_empty() {
            diag.error_with_hint(
                Self::TARGETS,
                format!("{} is enabled but no targets are listed", Self::ENABLE),
                format!("supported targets: {}", ShareTarget::names()),
            );
        }

        let mut seen = FxHashSet::default();
        for name in &self.targets {
            match name.parse::<ShareTarget>() {
                Ok(target) => {
                    if !seen.insert(target) {
                        diag.warn(Self::TARGETS, format!("duplicate target `{target}`"));
                    }
                }
                Err(e) => diag.error_with_hint(
                    Self::TARGETS,
                    e.to_string(),
                    format!("supported targets: {}", ShareTarget::names()),
                ),
            }
        }

        if self.class.is_empty() || self.class.contains(char::is_whitespace) {
            diag.error_with_hint(
                Self::CLASS,
                format!("invalid class `{}`", self.class),
                "use a single class name, e.g.: \"share\"",
            );
        }
    }

    /// Supported targets in configured order, duplicates and unknown names dropped.
    pub fn resolved_targets(&self) -> Vec<ShareTarget> {
        let mut seen = FxHashSet::default();
        self.targets
            .iter()
            .filter_map(|name| name.parse::<ShareTarget>().ok())
            .filter(|target| seen.insert(*target))
            .collect()
    }

    pub fn anchor_options(&self) -> AnchorOptions {
        AnchorOptions {
            class: self.class.clone(),
            labels: self.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let share = &config.site.share;
        assert!(share.enable);
        assert_eq!(
            share.resolved_targets(),
            vec![
                ShareTarget::Twitter,
                ShareTarget::Facebook,
                ShareTarget::LinkedIn,
                ShareTarget::Reddit
            ]
        );
        assert_eq!(share.anchor_options(), AnchorOptions::default());
    }

    #[test]
    fn test_parse_section() {
        let config = test_parse_config(
            "[site.share]\ntargets = [\"hn\", \"Bluesky\"]\nhashtags = [\"rust\"]\nlabels = \"none\"\nclass = \"btn\"",
        );
        let share = &config.site.share;
        assert_eq!(
            share.resolved_targets(),
            vec![ShareTarget::HackerNews, ShareTarget::Bluesky]
        );
        assert_eq!(share.hashtags, vec!["rust"]);
        assert_eq!(share.labels, LabelStyle::None);
        assert_eq!(share.anchor_options().class, "btn");
    }

    #[test]
    fn test_unknown_target_reported() {
        let config = test_parse_config("[site.share]\ntargets = [\"reddit\", \"myspace\"]");
        let mut diag = ConfigDiagnostics::new();
        config.site.share.validate(&mut diag);

        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field, ShareConfig::TARGETS);
        assert!(err.message.contains("myspace"));
        assert!(err.hint.as_deref().unwrap().contains("reddit"));

        assert_eq!(config.site.share.resolved_targets(), vec![ShareTarget::Reddit]);
    }

    #[test]
    fn test_empty_targets() {
        let config = test_parse_config("[site.share]\ntargets = []");
        let mut diag = ConfigDiagnostics::new();
        config.site.share.validate(&mut diag);
        assert!(diag.has_errors());

        let config = test_parse_config("[site.share]\nenable = false\ntargets = []");
        let mut diag = ConfigDiagnostics::new();
        config.site.share.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_duplicates_warn() {
        let config = test_parse_config("[site.share]\ntargets = [\"x\", \"twitter\"]");
        let mut diag = ConfigDiagnostics::new();
        config.site.share.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(config.site.share.resolved_targets(), vec![ShareTarget::Twitter]);
    }

    #[test]
    fn test_bad_class() {
        let config = test_parse_config("[site.share]\nclass = \"a b\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.share.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, ShareConfig::CLASS);
    }
}
