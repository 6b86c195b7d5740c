// src/quiz/text.rs

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Marker appended to any string cut short by [`truncate_chars`].
pub const ELLIPSIS: &str = "...";

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Returns the first `max_chars` characters of `s`, counting Unicode scalar
/// values rather than bytes.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Cuts `s` to `max_chars` characters and appends [`ELLIPSIS`] if anything was removed.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    let head = take_chars(s, max_chars);
    if head.len() < s.len() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        s.to_string()
    }
}

/// The "shortened form" used for options and for the fallback question:
/// whitespace-collapsed, then truncated with an ellipsis marker.
pub fn shorten(s: &str, max_chars: usize) -> String {
    truncate_chars(&collapse_whitespace(s), max_chars)
}
