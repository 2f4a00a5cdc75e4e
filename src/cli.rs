//! Command-line interface definitions.
//!
//! All options are optional; with none given the live page is fetched and the
//! meetings are printed to stdout as JSON.

use chrono::NaiveDateTime;
use clap::Parser;

/// Command-line arguments for the meeting scraper.
///
/// # Examples
///
/// ```sh
/// # Fetch the live page and print JSON
/// acla_meetings
///
/// # Parse a saved page with a fixed clock
/// acla_meetings --input who-we-are.html --now 2021-01-08T00:00:00
///
/// # Write JSON to a directory, skipping impossible dates
/// acla_meetings -j ./output --skip-invalid-dates
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Parse this saved HTML file instead of fetching the page
    #[arg(short, long)]
    pub input: Option<String>,

    /// Source page URL (also echoed into every record)
    #[arg(short, long, env = "ACLA_SOURCE_URL")]
    pub url: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for the JSON file; prints to stdout when omitted
    #[arg(short, long, env = "ACLA_JSON_OUTPUT_DIR")]
    pub json_output_dir: Option<String>,

    /// Treat this local time as "now" (format: 2021-01-08T00:00:00)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// Skip lines with impossible dates instead of rejecting the page
    #[arg(long)]
    pub skip_invalid_dates: bool,
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}
