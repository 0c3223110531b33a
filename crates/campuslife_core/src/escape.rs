//! Markup escaping for rendered fragments.
//!
//! # Responsibility
//! - Turn arbitrary text into text that is safe to splice into HTML.
//!
//! # Invariants
//! - Output never contains a raw `&`, `<`, `>`, `"` or `'` from the input.
//! - Escaping is not idempotent: `&amp;` escapes again to `&amp;amp;`.

use std::fmt::Display;

/// Escapes the five markup-significant characters of `value`.
///
/// Non-string values are escaped through their `Display` representation.
///
/// ```
/// use campuslife_core::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html(42), "42");
/// ```
pub fn escape_html(value: impl Display) -> String {
    let text = value.to_string();
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_each_significant_character() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<>"), "&lt;&gt;");
        assert_eq!(escape_html("\"'"), "&quot;&#039;");
    }

    #[test]
    fn escaping_twice_re_escapes_ampersands() {
        let once = escape_html("<b>");
        assert_eq!(escape_html(&once), "&amp;lt;b&amp;gt;");
    }

    #[test]
    fn coerces_non_string_input() {
        assert_eq!(escape_html(24_u32), "24");
        assert_eq!(escape_html('<'), "&lt;");
    }
}
