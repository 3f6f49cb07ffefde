//! Error types for URL cleaning and redirect resolution.

use thiserror::Error;

/// Error from cleaning a URL or a block of text.
///
/// Finding no URLs, or no tracking keys to remove, is not an error; those
/// cases return the input unchanged.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// URL-shaped text that still could not be split into components.
    #[error("cannot split `{0}` into URL components")]
    Parse(String),
    /// The redirect resolver's network request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failure of the blocking redirect lookup. Propagated as-is; never retried
/// or cached.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transfer could not complete (DNS, connection, timeout, protocol).
    #[error("request for {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The transfer completed but no final URL was reported.
    #[error("no final URL reported for {url}")]
    NoFinalUrl { url: String },
}
