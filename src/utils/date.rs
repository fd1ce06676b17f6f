// Due-date string parsing
//
// Due dates are stored as the literal strings users type. They are parsed
// only when the date sort needs an ordering key; a string that does not
// match either accepted form simply has no key.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a due-date string of the form `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
///
/// A date without a time sorts at midnight. Returns None for anything
/// else, including empty strings.
pub fn parse_due(expr: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(expr, "%Y-%m-%d %H:%M") {
        return Some(datetime);
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
