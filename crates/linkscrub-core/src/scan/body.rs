//! Body consumption and trailing-punctuation trimming.
//!
//! The body of a scheme or host-path match runs greedily to the first
//! whitespace or angle/square/curly bracket. The tail is then trimmed of
//! punctuation a sentence would hang on the URL, with one exception: a
//! closing parenthesis stays when a parenthesis opened inside the match
//! (one level of balancing, the Wikipedia-article case).

/// Consumes body characters starting at `from`; returns the end offset.
pub(super) fn consume_body(text: &str, from: usize) -> usize {
    let mut end = from;
    for c in text[from..].chars() {
        if c.is_whitespace() || matches!(c, '<' | '>' | '{' | '}' | '[' | ']') {
            break;
        }
        end += c.len_utf8();
    }
    end
}

/// Trims trailing punctuation from `text[body_start..end]`, keeping a `)`
/// that closes a parenthesis opened within the candidate. Returns the new
/// end offset.
pub(super) fn trim_trailing(text: &str, body_start: usize, mut end: usize) -> usize {
    while end > body_start {
        let Some(ch) = text[body_start..end].chars().next_back() else {
            break;
        };
        if !is_trailing_punctuation(ch) {
            break;
        }
        if ch == ')' && !has_unmatched_closing_paren(&text[body_start..end]) {
            break;
        }
        end -= ch.len_utf8();
    }
    end
}

fn is_trailing_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '`' | '!'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | ';'
            | ':'
            | '\''
            | '"'
            | '.'
            | ','
            | '<'
            | '>'
            | '?'
            | '«'
            | '»'
            | '“'
            | '”'
            | '‘'
            | '’'
    )
}

/// More `)` than `(` in `candidate` means its final `)` belongs to the
/// surrounding text, not the URL.
fn has_unmatched_closing_paren(candidate: &str) -> bool {
    let mut open = 0usize;
    let mut close = 0usize;
    for c in candidate.chars() {
        if c == '(' {
            open += 1;
        } else if c == ')' {
            close += 1;
        }
    }
    close > open
}
