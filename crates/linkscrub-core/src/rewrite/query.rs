//! Ordered query-string model.
//!
//! Keys are kept in first-seen order and each key keeps the verbatim text
//! of every `key[=value]` pair it appeared in. Nothing is percent-decoded,
//! so pairs that survive filtering come back byte for byte.

/// All pairs for one key, verbatim and in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct QueryKey<'a> {
    pub key: &'a str,
    pub pairs: Vec<&'a str>,
}

/// Splits a raw query string on `&` into per-key groups. A bare key with no
/// `=` is kept as a pair of its own; empty segments from `&&` are skipped.
pub(super) fn parse_query(query: &str) -> Vec<QueryKey<'_>> {
    let mut keys: Vec<QueryKey<'_>> = Vec::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let key = pair.split_once('=').map_or(pair, |(k, _)| k);
        match keys.iter_mut().find(|group| group.key == key) {
            Some(group) => group.pairs.push(pair),
            None => keys.push(QueryKey {
                key,
                pairs: vec![pair],
            }),
        }
    }
    keys
}

/// Joins retained groups back into a query string: first-seen key order,
/// each key's pairs verbatim and in order.
pub(super) fn join_query(keys: &[&QueryKey<'_>]) -> String {
    let mut parts = Vec::new();
    for group in keys {
        parts.extend(group.pairs.iter().copied());
    }
    parts.join("&")
}
