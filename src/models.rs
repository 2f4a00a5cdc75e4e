//! Data models for scraped meeting dates and finished meeting records.
//!
//! This module defines the core data structures used throughout the application:
//! - [`DateNote`]: One parsed schedule line (calendar date plus optional note)
//! - [`MeetingTimeSet`]: The pinned time of day for each meeting series
//! - [`ScheduledMeeting`]: A finished, status-tagged meeting record
//! - Enumerations: [`Category`], [`Classification`], [`Status`]
//!
//! The serialized field names of [`ScheduledMeeting`] follow the city-scrapers
//! meeting item (`id`, `time_notes`, `source`, ...), so the JSON output can be
//! consumed by the same downstream tooling.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date parsed from one schedule line, with its free-text note.
///
/// The source page never prints a year, so `calendar_date` always carries the
/// processing year supplied by the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNote {
    /// The meeting date.
    pub calendar_date: NaiveDate,
    /// Trimmed text following the date, absent when nothing follows it.
    pub note: Option<String>,
}

impl DateNote {
    pub fn new(calendar_date: NaiveDate, note: Option<String>) -> Self {
        Self {
            calendar_date,
            note,
        }
    }
}

/// The recurring meeting series published on the page.
///
/// Each series has its own list of dates and its own time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Board,
    General,
    Advisory,
    Lac,
}

impl Category {
    /// All series in page order.
    pub const ALL: [Category; 4] = [
        Category::Board,
        Category::General,
        Category::Advisory,
        Category::Lac,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Board => "board",
            Category::General => "general",
            Category::Advisory => "advisory",
            Category::Lac => "lac",
        };
        f.write_str(name)
    }
}

/// The classification value written into each meeting record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Board")]
    Board,
    #[serde(rename = "Forum")]
    Forum,
    #[serde(rename = "Advisory Committee")]
    AdvisoryCommittee,
    #[serde(rename = "Committee")]
    Committee,
}

/// Meeting status, always computed from the note and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Cancelled,
    Confirmed,
    Passed,
}

/// Where a meeting takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

impl Location {
    /// The location used while all meetings are held remotely.
    pub fn remote() -> Self {
        Self {
            name: "Remote".to_string(),
            address: "Remote".to_string(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::remote()
    }
}

/// Time of day for every meeting series.
///
/// # Invariant
///
/// Whenever the structural verifier succeeds this holds the pinned values
/// 18:30 / 19:00 / 10:00 / 10:00. The times are never read from page prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingTimeSet {
    pub board: NaiveTime,
    pub general: NaiveTime,
    pub advisory: NaiveTime,
    pub lac: NaiveTime,
}

impl MeetingTimeSet {
    /// Time of day for one series.
    pub fn get(&self, category: Category) -> NaiveTime {
        match category {
            Category::Board => self.board,
            Category::General => self.general,
            Category::Advisory => self.advisory,
            Category::Lac => self.lac,
        }
    }
}

/// A finished meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    /// `{prefix}{YYYY_MM_DD}`; unique only within one series.
    #[serde(rename = "id")]
    pub identity: String,
    pub title: String,
    pub classification: Classification,
    pub status: Status,
    pub all_day: bool,
    #[serde(rename = "time_notes")]
    pub note: Option<String>,
    pub location: Location,
    #[serde(rename = "source")]
    pub source_url: String,
    pub start: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meeting() -> ScheduledMeeting {
        let start = NaiveDate::from_ymd_opt(2021, 2, 22)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        ScheduledMeeting {
            identity: "alle_library_assoc_board_2021_02_22".to_string(),
            title: "Board Meeting".to_string(),
            classification: Classification::Board,
            status: Status::Confirmed,
            all_day: false,
            note: Some("BOARD RETREAT".to_string()),
            location: Location::remote(),
            source_url: "https://aclalibraries.org/who-we-are/".to_string(),
            start,
        }
    }

    #[test]
    fn test_meeting_serializes_with_item_field_names() {
        let json = serde_json::to_value(sample_meeting()).unwrap();

        assert_eq!(json["id"], "alle_library_assoc_board_2021_02_22");
        assert_eq!(json["classification"], "Board");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["all_day"], false);
        assert_eq!(json["time_notes"], "BOARD RETREAT");
        assert_eq!(json["location"]["name"], "Remote");
        assert_eq!(json["source"], "https://aclalibraries.org/who-we-are/");
        assert_eq!(json["start"], "2021-02-22T18:30:00");
    }

    #[test]
    fn test_meeting_without_note_serializes_null() {
        let mut meeting = sample_meeting();
        meeting.note = None;
        let json = serde_json::to_value(meeting).unwrap();
        assert!(json["time_notes"].is_null());
    }

    #[test]
    fn test_classification_names() {
        let names: Vec<String> = [
            Classification::Board,
            Classification::Forum,
            Classification::AdvisoryCommittee,
            Classification::Committee,
        ]
        .iter()
        .map(|c| serde_json::to_value(c).unwrap().as_str().unwrap().to_string())
        .collect();
        assert_eq!(names, ["Board", "Forum", "Advisory Committee", "Committee"]);
    }

    #[test]
    fn test_meeting_time_set_lookup() {
        let times = MeetingTimeSet {
            board: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            general: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            advisory: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            lac: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        assert_eq!(times.get(Category::General), times.general);
        assert_eq!(times.get(Category::Lac), times.lac);
    }

    #[test]
    fn test_category_display() {
        let shown: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(shown, ["board", "general", "advisory", "lac"]);
    }
}
