//! `linkscrub scan [TEXT]` – list URLs found in the text.

use anyhow::Result;
use linkscrub_core::scan;

pub fn run_scan(text: Option<String>) -> Result<()> {
    let text = super::read_text(text)?;
    for span in scan::find_urls(&text) {
        println!("{}..{}\t{}", span.start, span.end, span.as_str());
    }
    Ok(())
}
