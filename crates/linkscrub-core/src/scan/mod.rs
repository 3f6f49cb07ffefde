//! URL detection in free text.
//!
//! A hand-rolled scanner rather than one opaque pattern. A match starts with
//! one of three forms — an explicit `http`/`https` scheme, a scheme-less host
//! ending in a path TLD followed by `/`, or a bare host — and the first two
//! then consume a body with one level of parenthesis balancing and
//! trailing-punctuation trimming. Spans never overlap and are reported left
//! to right. This is a heuristic for prose, not a URL validator.

mod body;
mod forms;

use body::{consume_body, trim_trailing};
use forms::{bare_host_end, host_path_body_start, scheme_body_start};

/// A URL found in a larger piece of text: byte offsets into the scanned
/// text plus the matched slice itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlSpan<'a> {
    pub start: usize,
    pub end: usize,
    text: &'a str,
}

impl<'a> UrlSpan<'a> {
    /// The matched substring.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// True only if the entire string is a single URL, with no leading or
/// trailing text at all.
pub fn is_url(s: &str) -> bool {
    match_at(s, 0).is_some_and(|end| end == s.len())
}

/// Finds every URL in `text`, left to right, without overlaps.
///
/// Non-matching text is skipped over, never consumed into a match.
pub fn find_urls(text: &str) -> Vec<UrlSpan<'_>> {
    let mut spans = Vec::new();
    let mut at = 0;
    while at < text.len() {
        if let Some(end) = match_at(text, at) {
            spans.push(UrlSpan {
                start: at,
                end,
                text: &text[at..end],
            });
            at = end;
        } else {
            at += text[at..].chars().next().map_or(1, char::len_utf8);
        }
    }
    spans
}

/// Attempts a match starting exactly at byte offset `at`, trying the start
/// forms in fixed order. Returns the end offset of the match.
fn match_at(text: &str, at: usize) -> Option<usize> {
    if let Some(end) = scheme_body_start(text, at).and_then(|body| match_body(text, body)) {
        return Some(end);
    }
    if let Some(end) = host_path_body_start(text, at).and_then(|body| match_body(text, body)) {
        return Some(end);
    }
    bare_host_end(text, at)
}

/// Consumes and trims a body beginning at `body_start`; the match fails when
/// nothing survives the trim.
fn match_body(text: &str, body_start: usize) -> Option<usize> {
    let end = trim_trailing(text, body_start, consume_body(text, body_start));
    (end > body_start).then_some(end)
}
