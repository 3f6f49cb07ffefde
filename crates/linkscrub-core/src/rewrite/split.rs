//! Raw URL splitting and reassembly.
//!
//! `url::Url` re-encodes and normalizes on parse (lowers the host, adds a
//! root path), so rewriting through it would change bytes the query filter
//! never touched. This splitter keeps every component as a verbatim slice
//! of the input; reassembling an unmodified split reproduces the input
//! exactly.

use crate::error::ScrubError;

/// Component slices of a URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SplitUrl<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits `url` into raw components. Fails only on a malformed authority:
/// a bracketed IPv6 literal must open and close inside it.
pub(super) fn split_url(url: &str) -> Result<SplitUrl<'_>, ScrubError> {
    let (rest, fragment) = match url.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (url, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((r, q)) => (r, Some(q)),
        None => (rest, None),
    };
    let (scheme, rest) = split_scheme(rest);
    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };
    if let Some(auth) = authority {
        if auth.contains('[') != auth.contains(']') {
            return Err(ScrubError::Parse(url.to_string()));
        }
    }
    Ok(SplitUrl {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Reassembles the split with `query` in place of the original query.
/// Empty query and fragment drop their `?` / `#` marker.
pub(super) fn unsplit(parts: &SplitUrl<'_>, query: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(scheme) = parts.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(auth) = parts.authority {
        out.push_str("//");
        out.push_str(auth);
    }
    out.push_str(parts.path);
    if let Some(q) = query {
        if !q.is_empty() {
            out.push('?');
            out.push_str(q);
        }
    }
    if let Some(f) = parts.fragment {
        if !f.is_empty() {
            out.push('#');
            out.push_str(f);
        }
    }
    out
}

/// Splits a leading `scheme:` when the prefix before the first `:` looks
/// like a scheme (letter, then letters/digits/`+`/`-`/`.`).
fn split_scheme(s: &str) -> (Option<&str>, &str) {
    let Some(colon) = s.find(':') else {
        return (None, s);
    };
    let candidate = &s[..colon];
    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (Some(candidate), &s[colon + 1..])
    } else {
        (None, s)
    }
}
