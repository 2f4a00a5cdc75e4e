//! Output generation for scraped meetings.
//!
//! # Submodules
//!
//! - [`json`]: Writes the meeting feed to a JSON file or stdout for the
//!   downstream item pipeline

pub mod json;
