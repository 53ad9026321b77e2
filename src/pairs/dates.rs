//! Tolerant multi-format date resolution.
//!
//! A small ordered list of strict parsers tried in sequence, first success
//! wins. Blank and `NULL` values are handled per field: a start date is
//! never defaulted, an end date resolves to today's date.

use chrono::NaiveDate;

/// Accepted calendar-date patterns, tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%d/%m/%Y", "%m-%d-%Y"];

fn is_unset(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null")
}

/// First pattern that parses the whole string wins. chrono validates
/// component ranges, so month 13 or day 32 never parses.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Start dates are required: blank, `NULL`, or unparsable is unresolved and
/// the caller drops the row.
pub fn resolve_start(raw: &str) -> Option<NaiveDate> {
    if is_unset(raw) {
        return None;
    }
    parse_flexible(raw)
}

/// A blank or `NULL` end date marks an assignment still ongoing and
/// resolves to `today`; anything else must parse like a start date.
pub fn resolve_end(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    if is_unset(raw) {
        return Some(today);
    }
    parse_flexible(raw)
}
