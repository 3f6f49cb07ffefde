mod clean;
mod scan;

pub use clean::run_clean;
pub use scan::run_scan;

use anyhow::{Context, Result};
use std::io::Read;

/// The TEXT argument, or all of stdin when it was omitted.
fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}
