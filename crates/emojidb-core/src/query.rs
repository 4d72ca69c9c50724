//! Search URL construction.
//!
//! A free-text query becomes a single path segment on the EmojiDB host:
//! `<base>/<segment>-emojis?utm_source=user_search`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped inside one path segment: RFC 3986 unreserved marks
/// plus the sub-delimiters that are legal in a segment. `/ ? ; ,` stay escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

const QUERY_SUFFIX: &str = "-emojis?utm_source=user_search";

/// Trims, lowercases and hyphenates a query (no escaping).
///
/// Only the ASCII space is replaced; tabs and other whitespace inside the
/// query are left for the escaper.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase().replace(' ', "-")
}

/// Percent-escapes `segment` for embedding as a single URL path segment.
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Builds the lookup URL for `query` under `base_url`.
///
/// Never fails: an empty query yields the degenerate path `/-emojis`.
///
/// # Examples
///
/// - `build_search_url("https://emojidb.org", "Happy Face")`
///   → `"https://emojidb.org/happy-face-emojis?utm_source=user_search"`
pub fn build_search_url(base_url: &str, query: &str) -> String {
    let segment = escape_path_segment(&normalize_query(query));
    format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        segment,
        QUERY_SUFFIX
    )
}
