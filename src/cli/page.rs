//! Page command implementation.
//!
//! Scans markdown posts in parallel and builds share links for the
//! configured targets, using each page's canonical URL and title.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use serde_json::{Map, Value as JsonValue};

use super::common::collect_content_files;
use crate::cli::args::PageArgs;
use crate::config::SiteConfig;
use crate::page::{
    MetaExtractor, PageMeta, canonical_url, first_heading, normalize_permalink, route_for,
};
use crate::share::{self, ShareLink, ShareRequest, ShareTarget, render_links};
use crate::utils::plural_count;
use crate::{debug, log};

/// Share links for a single page
#[derive(Debug)]
pub struct PageShare {
    /// Path relative to the site root
    pub path: String,
    pub route: String,
    pub request: ShareRequest,
    pub links: Vec<(ShareTarget, ShareLink)>,
}

/// Execute page command
pub fn run_page(args: &PageArgs, config: &SiteConfig) -> Result<()> {
    if !config.site.share.enable {
        log!("page"; "sharing is disabled in [site.share], nothing to do");
        return Ok(());
    }

    let files = collect_content_files(&args.paths, &config.build.content)?;
    log!("page"; "scanning {}", plural_count(files.len(), "file"));

    let pages = share_pages(&files, args.drafts, config)?;
    log!(
        "page";
        "built {} for {}",
        plural_count(pages.iter().map(|p| p.links.len()).sum(), "link"),
        plural_count(pages.len(), "page")
    );

    // an empty batch still yields `[]` (or an empty document with --html)
    let formatted = if args.html {
        format_html(&pages, config)
    } else {
        let json = format_json(&pages);
        if args.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        }
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("page"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Scan files in parallel, sorted by route.
///
/// Unreadable or malformed files are reported and skipped.
fn share_pages(files: &[PathBuf], include_drafts: bool, config: &SiteConfig) -> Result<Vec<PageShare>> {
    let site_url = config
        .site_url()
        .ok_or_else(|| anyhow!("[site.info] url is required to share pages"))?;
    let targets = config.site.share.resolved_targets();

    let mut pages: Vec<PageShare> = files
        .par_iter()
        .filter_map(|file| {
            match scan_page(file, site_url, &targets, include_drafts, config) {
                Ok(page) => page,
                Err(e) => {
                    log!("warning"; "skipping {}: {:#}", file.display(), e);
                    None
                }
            }
        })
        .collect();

    pages.sort_by(|a, b| a.route.cmp(&b.route).then_with(|| a.path.cmp(&b.path)));
    Ok(pages)
}

/// Build share links for one page, or `None` when the page is skipped.
fn scan_page(
    file: &Path,
    site_url: &str,
    targets: &[ShareTarget],
    include_drafts: bool,
    config: &SiteConfig,
) -> Result<Option<PageShare>> {
    let content = fs::read_to_string(file)?;
    let (meta, body) = MetaExtractor
        .extract_frontmatter(&content)?
        .unwrap_or_else(|| (PageMeta::default(), content.as_str()));

    let path = config.root_relative(file).to_string_lossy().into_owned();
    if meta.draft && !include_drafts {
        debug!("page"; "skipping draft {}", path);
        return Ok(None);
    }
    if !meta.share {
        debug!("page"; "skipping {} (share = false)", path);
        return Ok(None);
    }

    let route = match meta.permalink.as_deref() {
        Some(permalink) => normalize_permalink(permalink),
        None => route_for(file, &config.build.content, config.build.slug),
    };
    let url = canonical_url(site_url, &route)?;

    let title = page_title(&meta, body, file);
    let tags = meta
        .tags
        .iter()
        .chain(&config.site.share.hashtags)
        .cloned()
        .collect::<Vec<_>>();

    let request = ShareRequest::new(url).with_text(title).with_tags(tags);
    let links = share::build_all(targets, &request)?;

    Ok(Some(PageShare {
        path,
        route,
        request,
        links,
    }))
}

/// Frontmatter title, then first heading, then file stem.
fn page_title(meta: &PageMeta, body: &str, file: &Path) -> String {
    meta.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| {
            file.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

// ============================================================================
// Output Formatting
// ============================================================================

/// JSON array with path/route/url/title first, then links keyed by target
fn format_json(pages: &[PageShare]) -> JsonValue {
    let pages = pages
        .iter()
        .map(|page| {
            let mut obj = Map::new();
            obj.insert("path".to_string(), JsonValue::String(page.path.clone()));
            obj.insert("route".to_string(), JsonValue::String(page.route.clone()));
            obj.insert("url".to_string(), JsonValue::from(page.request.url()));
            obj.insert("title".to_string(), JsonValue::from(page.request.text()));

            let links: Map<String, JsonValue> = page
                .links
                .iter()
                .map(|(target, link)| (target.name().to_string(), JsonValue::from(link.as_str())))
                .collect();
            obj.insert("links".to_string(), JsonValue::Object(links));

            JsonValue::Object(obj)
        })
        .collect();

    JsonValue::Array(pages)
}

/// One share bar per page, preceded by a route comment
fn format_html(pages: &[PageShare], config: &SiteConfig) -> String {
    let options = config.site.share.anchor_options();
    pages
        .iter()
        .map(|page| {
            format!(
                "<!-- {} -->\n{}",
                page.route,
                render_links(&page.links, &options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
