//! libcurl-backed redirect transport.

use super::RedirectTransport;
use crate::error::TransportError;
use std::time::Duration;

/// Follows redirects with one blocking GET on a curl easy handle.
///
/// Timeout policy lives here, not in the resolver, so a substitute
/// transport carries its own.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirections: 10,
        }
    }
}

impl RedirectTransport for CurlTransport {
    fn final_url(&self, url: &str) -> Result<String, TransportError> {
        let fail = |source: curl::Error| TransportError::Curl {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(fail)?;
        easy.get(true).map_err(fail)?;
        easy.follow_location(true).map_err(fail)?;
        easy.max_redirections(self.max_redirections).map_err(fail)?;
        easy.connect_timeout(self.connect_timeout).map_err(fail)?;
        easy.timeout(self.timeout).map_err(fail)?;

        {
            let mut transfer = easy.transfer();
            // The body is irrelevant; only where the transfer ends up matters.
            transfer.write_function(|data| Ok(data.len())).map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        match easy.effective_url().map_err(fail)? {
            Some(final_url) => Ok(final_url.to_string()),
            None => Err(TransportError::NoFinalUrl {
                url: url.to_string(),
            }),
        }
    }
}
