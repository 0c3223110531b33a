//! Search term normalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest search term, in characters, passed on to filtering.
pub const MAX_SEARCH_TERM_CHARS: usize = 120;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapses whitespace runs to one space, trims, and caps the length at
/// [`MAX_SEARCH_TERM_CHARS`] characters.
pub fn sanitize_search_term(value: impl AsRef<str>) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(value.as_ref(), " ");
    collapsed
        .trim()
        .chars()
        .take(MAX_SEARCH_TERM_CHARS)
        .collect()
}
