//! Page pipeline: verify the page, parse every schedule line, build records.
//!
//! # Failure policy
//!
//! - Any [`StructureFailure`](crate::errors::StructureFailure) rejects the
//!   whole page. No partial results are returned.
//! - Lines that are not schedule lines are logged and skipped.
//! - Impossible dates (February 30) follow the configured
//!   [`InvalidDatePolicy`]; by default they reject the page.

use itertools::Itertools;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

use crate::clock::Clock;
use crate::config::SpiderConfig;
use crate::date_line::parse_line;
use crate::errors::{InvalidDatePolicy, LineSeverity, PageError};
use crate::models::{Category, DateNote, ScheduledMeeting};
use crate::schedule::{SeriesInfo, assemble};
use crate::utils::truncate_for_log;
use crate::verifier::{
    SECTION_HEADING, locate_section, schedule_lines, verify_and_extract, verify_remote_statement,
};

/// Parse the lines of one series, skipping or aborting per failure severity.
pub fn collect_dates(
    category: Category,
    lines: &[String],
    year: i32,
    policy: InvalidDatePolicy,
) -> Result<Vec<DateNote>, PageError> {
    let mut dates = Vec::with_capacity(lines.len());
    for line in lines {
        match parse_line(line, year) {
            Ok(date) => dates.push(date),
            Err(failure) => match failure.severity(policy) {
                LineSeverity::SkipLine => {
                    warn!(
                        %category,
                        line = %truncate_for_log(line, 120),
                        error = %failure,
                        "Failed to capture a meeting date; skipping line"
                    );
                }
                LineSeverity::AbortPage => {
                    return Err(PageError::InvalidDate { category, failure });
                }
            },
        }
    }
    debug!(%category, parsed = dates.len(), lines = lines.len(), "Parsed schedule lines");
    Ok(dates)
}

/// Extract every meeting from the page HTML.
#[instrument(level = "info", skip_all, fields(source = %config.source_url))]
pub fn parse_page(
    html: &str,
    config: &SpiderConfig,
    clock: &dyn Clock,
) -> Result<Vec<ScheduledMeeting>, PageError> {
    let document = Html::parse_document(html);
    let section = locate_section(&document, SECTION_HEADING)?;
    let times = verify_and_extract(section)?;
    verify_remote_statement(section)?;
    let lines = schedule_lines(section)?;

    let now = clock.now();
    let year = clock.current_year();

    let mut meetings = Vec::new();
    for category in Category::ALL {
        let dates = collect_dates(category, lines.get(category), year, config.invalid_dates)?;
        let series = config.series(category);
        let info = SeriesInfo {
            time_of_day: times.get(category),
            identity_prefix: &series.id_prefix,
            title: &series.title,
            classification: series.classification,
            location: &config.location,
            source_url: &config.source_url,
        };
        let batch = assemble(&dates, info, now);
        info!(%category, count = batch.len(), "Assembled meetings");
        meetings.extend(batch);
    }

    for identity in meetings.iter().map(|m| &m.identity).duplicates() {
        warn!(%identity, "Duplicate meeting identity");
    }

    Ok(meetings)
}
