//! Link command implementation.

use anyhow::Result;
use serde_json::json;

use crate::cli::args::LinkArgs;
use crate::config::SiteConfig;
use crate::share::{self, AnchorOptions, Field, ShareRequest, ShareTarget, render_anchor};
use crate::{debug, log};

/// Execute link command
pub fn run_link(args: &LinkArgs, config: &SiteConfig) -> Result<()> {
    let output = format_link(args, &config.site.share.anchor_options())?;
    println!("{output}");
    Ok(())
}

/// Build the link and format it per output flags.
fn format_link(args: &LinkArgs, options: &AnchorOptions) -> Result<String> {
    let target: ShareTarget = args.target.parse()?;
    if !args.tags.is_empty() && !target.supports(Field::Tags) {
        log!("warning"; "{} does not take hashtags, ignoring --tag", target);
    }
    let request = ShareRequest::new(&args.url)
        .with_text(&args.text)
        .with_tags(&args.tags);

    let link = share::build(target, &request)?;
    debug!("link"; "{} -> {}", target, link);

    Ok(if args.json {
        json!({ "target": target, "link": link }).to_string()
    } else if args.html {
        render_anchor(target, &link, options)
    } else {
        link.into_string()
    })
}
