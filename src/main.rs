//! # ACLA Meetings
//!
//! Scrapes the Allegheny County Library Association "Who We Are" page, which
//! publishes its meeting schedule only as prose and bulleted date lines, and
//! emits structured meeting records as JSON.
//!
//! ## Usage
//!
//! ```sh
//! acla_meetings -j ./json
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: Download the page (or read a saved copy)
//! 2. **Verification**: Check the page still has the shape the pinned meeting
//!    times were checked against; any deviation rejects the whole page
//! 3. **Parsing**: Turn each schedule line into a date and optional note
//! 4. **Assembly**: Build status-tagged meeting records per series
//! 5. **Output**: Write the JSON feed

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod clock;
mod config;
mod date_line;
mod errors;
mod fetch;
mod html;
mod models;
mod outputs;
mod schedule;
mod spider;
#[cfg(test)]
mod testdata;
mod utils;
mod verifier;

use cli::Cli;
use clock::{Clock, FixedClock, SystemClock};
use config::SpiderConfig;
use errors::InvalidDatePolicy;
use outputs::json::{MeetingFeed, to_json, write_feed};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("acla_meetings starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Configuration ----
    let mut config = match &args.config {
        Some(path) => SpiderConfig::load(path)?,
        None => SpiderConfig::default(),
    };
    if let Some(url) = &args.url {
        config = config.with_source_url(url)?;
    }
    if args.skip_invalid_dates {
        config.invalid_dates = InvalidDatePolicy::Skip;
    }

    let clock: Box<dyn Clock> = match args.now {
        Some(now) => {
            info!(%now, "Using fixed clock");
            Box::new(FixedClock(now))
        }
        None => Box::new(SystemClock),
    };

    // ---- Page ----
    let html = match &args.input {
        Some(path) => {
            info!(%path, "Reading saved page");
            tokio::fs::read_to_string(path).await?
        }
        None => fetch::fetch_with_backoff(&config.source_url).await?,
    };

    // ---- Parse ----
    let meetings = match spider::parse_page(&html, &config, clock.as_ref()) {
        Ok(meetings) => meetings,
        Err(e) => {
            error!(error = %e, "Page rejected; emitting no meetings");
            return Err(e.into());
        }
    };
    info!(count = meetings.len(), "Parsed meetings");

    // ---- Output ----
    let feed = MeetingFeed::new(&config.source_url, clock.now(), &meetings);
    match &args.json_output_dir {
        Some(dir) => {
            write_feed(&feed, dir).await?;
        }
        None => println!("{}", to_json(&feed)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        millis = elapsed.as_millis() as u64,
        "Execution complete"
    );

    Ok(())
}
