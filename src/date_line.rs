//! Schedule line parsing.
//!
//! The page lists meetings as lines such as `Monday, February 22 – BOARD RETREAT`.
//! A line is `<Weekday>,<sp><Month><sp><Day>`, optionally followed by a note
//! that may be introduced by a hyphen or en dash. Lines copied out of a CMS
//! routinely contain non-breaking and typographic spaces, so `<sp>` is any run
//! of Unicode whitespace.
//!
//! The weekday only anchors the pattern. It is not checked against the date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseFailure;
use crate::models::DateNote;

static DATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?is)^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday),\s+",
        r"(?P<month>january|february|march|april|may|june|july|august|september|october|november|december)\s+",
        r"(?P<day>[0-9]+)",
        r"(?:\s+[-\x{2013}]\s+|\s+)?",
        r"(?P<note>.*)$",
    ))
    .unwrap()
});

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse one trimmed schedule line into a date in `year` and an optional note.
///
/// # Errors
///
/// - [`ParseFailure::NoMatch`] when the line is not a schedule line. Callers
///   skip such lines.
/// - [`ParseFailure::InvalidCalendarDate`] when month and day do not exist in
///   `year` (e.g. February 30).
pub fn parse_line(raw: &str, year: i32) -> Result<DateNote, ParseFailure> {
    let line = raw.trim();
    let caps = DATE_LINE.captures(line).ok_or_else(|| ParseFailure::NoMatch {
        line: line.to_string(),
    })?;

    let month_name = &caps["month"];
    let day_text = &caps["day"];
    let invalid = || ParseFailure::InvalidCalendarDate {
        year,
        month: month_name.to_string(),
        day: day_text.to_string(),
    };

    let month = month_number(month_name).ok_or_else(invalid)?;
    let day: u32 = day_text.parse().map_err(|_| invalid())?;
    let calendar_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    let note = caps
        .name("note")
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(DateNote::new(calendar_date, note))
}
