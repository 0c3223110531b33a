//! Display formatting for ISO event dates.

use chrono::NaiveDate;

/// Formats `YYYY-MM-DD` as `Wed, Dec 3`.
///
/// Empty input yields an empty string; anything unparseable is returned
/// as-is.
pub fn format_event_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%a, %b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}
