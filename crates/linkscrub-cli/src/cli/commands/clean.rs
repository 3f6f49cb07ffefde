//! `linkscrub clean [TEXT]` – strip tracking parameters, print the result.

use anyhow::Result;
use linkscrub_core::config::ScrubConfig;
use linkscrub_core::rewrite::Scrubber;
use linkscrub_core::scan;
use std::io::Write;

pub fn run_clean(
    cfg: &ScrubConfig,
    text: Option<String>,
    resolve: bool,
    urls_only: bool,
) -> Result<()> {
    let text = super::read_text(text)?;
    let resolve = resolve || cfg.resolve_shorteners;
    let whole_text = cfg.scan_whole_text && !urls_only;

    let mut scrubber = Scrubber::new();
    for prefix in &cfg.extra_strip_prefixes {
        scrubber.add_strip_prefix(prefix.clone());
    }

    // An input that is nothing but a URL is always cleaned; anything longer
    // only when whole-text scanning applies.
    let cleaned = if scan::is_url(text.trim()) || whole_text {
        scrubber.fix_text(&text, resolve)?
    } else {
        text
    };

    let mut out = std::io::stdout();
    out.write_all(cleaned.as_bytes())?;
    out.flush()?;
    Ok(())
}
