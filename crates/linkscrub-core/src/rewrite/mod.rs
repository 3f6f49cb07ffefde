//! URL and text rewriting: drop tracking query keys, optionally resolve
//! shortener links.

mod query;
mod split;
mod strip;

pub use strip::STRIP_PREFIXES;

use crate::error::ScrubError;
use crate::resolve::{CurlTransport, RedirectResolver, RedirectTransport, SHORTENER_HOST};
use crate::scan;

use query::{join_query, parse_query, QueryKey};
use split::{split_url, unsplit};

/// Rewrites URLs: strips tracking query keys and, on request, resolves
/// shortener links through its redirect resolver.
pub struct Scrubber {
    extra_prefixes: Vec<String>,
    resolver: RedirectResolver,
}

impl Scrubber {
    /// Scrubber with the built-in prefix list and the curl-backed resolver.
    pub fn new() -> Self {
        Self::with_transport(Box::new(CurlTransport::default()))
    }

    /// Scrubber with a caller-supplied transport; tests use a stub.
    pub fn with_transport(transport: Box<dyn RedirectTransport>) -> Self {
        Self {
            extra_prefixes: Vec::new(),
            resolver: RedirectResolver::new(transport),
        }
    }

    /// Adds a query-key prefix to strip on top of the built-in list.
    pub fn add_strip_prefix(&mut self, prefix: impl Into<String>) {
        self.extra_prefixes.push(prefix.into());
    }

    /// Removes tracking query keys from one URL.
    ///
    /// When nothing is removed the input comes back byte for byte — no
    /// re-serialization. With `resolve_shorteners`, a result whose host is
    /// the known shortener is replaced by its final redirect target
    /// (stripping happens first); transport failures propagate.
    pub fn fix_url(&mut self, url: &str, resolve_shorteners: bool) -> Result<String, ScrubError> {
        let parts = split_url(url)?;
        let cleaned = match parts.query {
            Some(raw_query) => {
                let keys = parse_query(raw_query);
                let kept: Vec<&QueryKey<'_>> = keys
                    .iter()
                    .filter(|group| !self.is_tracking_key(group.key))
                    .collect();
                if kept.len() == keys.len() {
                    url.to_string()
                } else {
                    unsplit(&parts, Some(&join_query(&kept)))
                }
            }
            None => url.to_string(),
        };
        if resolve_shorteners && host_of(&cleaned).as_deref() == Some(SHORTENER_HOST) {
            return Ok(self.resolver.resolve(&cleaned)?);
        }
        Ok(cleaned)
    }

    /// Rewrites every URL found in `text`, copying all surrounding text
    /// through untouched. Returns the input unchanged when nothing matches.
    /// The first resolver failure aborts the whole call.
    pub fn fix_text(&mut self, text: &str, resolve_shorteners: bool) -> Result<String, ScrubError> {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        for span in scan::find_urls(text) {
            out.push_str(&text[copied..span.start]);
            out.push_str(&self.fix_url(span.as_str(), resolve_shorteners)?);
            copied = span.end;
        }
        out.push_str(&text[copied..]);
        Ok(out)
    }

    fn is_tracking_key(&self, key: &str) -> bool {
        STRIP_PREFIXES.iter().any(|p| key.starts_with(p))
            || self.extra_prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

/// True when at least one URL in `text` points at the known shortener host.
/// Host only — user-info and port do not defeat the check.
pub fn contains_shortener(text: &str) -> bool {
    scan::find_urls(text)
        .iter()
        .any(|span| host_of(span.as_str()).as_deref() == Some(SHORTENER_HOST))
}

/// Host component of `url`, when it parses as an absolute URL.
fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()?
        .host_str()
        .map(str::to_string)
}
