//! Shortener redirect resolution with an in-memory cache.

mod transport;

pub use transport::CurlTransport;

use crate::error::TransportError;
use std::collections::HashMap;

/// Hostname of the link shortener whose redirects we can follow.
pub const SHORTENER_HOST: &str = "t.co";

/// Fetch capability used to discover where a shortener link lands.
///
/// Implementations follow redirects and report the final URL exactly as
/// their HTTP stack sees it — which may carry a trailing slash the input
/// lacked, so callers must not assume the answer equals the input even for
/// a non-redirecting URL.
pub trait RedirectTransport {
    fn final_url(&self, url: &str) -> Result<String, TransportError>;
}

/// Resolves shortener links, remembering every answer for the lifetime of
/// the process.
///
/// Entries are keyed by the URL string exactly as issued and never evicted.
/// Failures are not cached; a later call for the same URL fetches again.
/// Single-threaded by design — wrap in a mutex to share across threads.
pub struct RedirectResolver {
    transport: Box<dyn RedirectTransport>,
    cache: HashMap<String, String>,
}

impl RedirectResolver {
    pub fn new(transport: Box<dyn RedirectTransport>) -> Self {
        Self {
            transport,
            cache: HashMap::new(),
        }
    }

    /// Final destination of `url`: cached when seen before, otherwise one
    /// blocking fetch.
    pub fn resolve(&mut self, url: &str) -> Result<String, TransportError> {
        if let Some(target) = self.cache.get(url) {
            tracing::debug!("redirect {url} -> {target} (cached)");
            return Ok(target.clone());
        }
        let target = self.transport.final_url(url)?;
        tracing::debug!("redirect {url} -> {target}");
        self.cache.insert(url.to_string(), target.clone());
        Ok(target)
    }
}
