//! Turns parsed dates into finished meeting records.

use chrono::{NaiveDateTime, NaiveTime};

use crate::models::{Classification, DateNote, Location, ScheduledMeeting, Status};

/// Everything a series contributes to its records besides the dates.
#[derive(Debug, Clone, Copy)]
pub struct SeriesInfo<'a> {
    pub time_of_day: NaiveTime,
    pub identity_prefix: &'a str,
    pub title: &'a str,
    pub classification: Classification,
    pub location: &'a Location,
    pub source_url: &'a str,
}

/// Derive a meeting's status.
///
/// A cancellation note wins over the clock: a cancelled meeting stays
/// cancelled after its date passes.
pub fn meeting_status(note: Option<&str>, start: NaiveDateTime, now: NaiveDateTime) -> Status {
    let cancelled = note.is_some_and(|note| {
        let note = note.to_lowercase();
        note.contains("canceled") || note.contains("cancelled")
    });

    if cancelled {
        Status::Cancelled
    } else if start < now {
        Status::Passed
    } else {
        Status::Confirmed
    }
}

/// `{prefix}{YYYY_MM_DD}` of the meeting start.
pub fn meeting_identity(prefix: &str, start: NaiveDateTime) -> String {
    format!("{}{}", prefix, start.format("%Y_%m_%d"))
}

/// Build one record per date, in input order.
///
/// Duplicate dates produce duplicate records with the same identity.
pub fn assemble(dates: &[DateNote], series: SeriesInfo<'_>, now: NaiveDateTime) -> Vec<ScheduledMeeting> {
    dates
        .iter()
        .map(|date| {
            let start = date.calendar_date.and_time(series.time_of_day);
            ScheduledMeeting {
                identity: meeting_identity(series.identity_prefix, start),
                title: series.title.to_string(),
                classification: series.classification,
                status: meeting_status(date.note.as_deref(), start, now),
                all_day: false,
                note: date.note.clone(),
                location: series.location.clone(),
                source_url: series.source_url.to_string(),
                start,
            }
        })
        .collect()
}
