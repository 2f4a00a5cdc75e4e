//! JSON output of scraped meetings.
//!
//! One file per spider run target, overwritten on each run:
//! ```text
//! json_output_dir/
//! └── alle_library_assoc.json
//! ```

use chrono::NaiveDateTime;
use serde::Serialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

use crate::config::{AGENCY, SPIDER_NAME};
use crate::models::ScheduledMeeting;
use crate::utils::ensure_writable_dir;

/// Everything one run produced.
#[derive(Debug, Serialize)]
pub struct MeetingFeed<'a> {
    pub spider: &'static str,
    pub agency: &'static str,
    pub source: &'a str,
    pub scraped_at: NaiveDateTime,
    pub meetings: &'a [ScheduledMeeting],
}

impl<'a> MeetingFeed<'a> {
    pub fn new(source: &'a str, scraped_at: NaiveDateTime, meetings: &'a [ScheduledMeeting]) -> Self {
        Self {
            spider: SPIDER_NAME,
            agency: AGENCY,
            source,
            scraped_at,
            meetings,
        }
    }
}

/// Serialize a feed as pretty-printed JSON.
pub fn to_json(feed: &MeetingFeed<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(feed)
}

/// Write a [`MeetingFeed`] to `{json_output_dir}/{spider}.json`.
///
/// Returns the path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_feed(
    feed: &MeetingFeed<'_>,
    json_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = to_json(feed)?;
    ensure_writable_dir(json_output_dir).await?;

    let path = format!(
        "{}/{}.json",
        json_output_dir.trim_end_matches('/'),
        feed.spider
    );
    fs::write(&path, json).await?;
    info!(%path, count = feed.meetings.len(), "Wrote meetings JSON");

    Ok(path)
}
