//! Error taxonomy for page parsing.
//!
//! Two severities exist and must not be confused:
//! - [`StructureFailure`] means the page no longer has the shape the pinned
//!   meeting times were checked against. Nothing from the page is trusted.
//! - [`ParseFailure`] concerns a single schedule line. Whether it skips the
//!   line or aborts the page is decided by [`InvalidDatePolicy`] through
//!   [`ParseFailure::severity`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Category;

/// A page-shape assumption did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureFailure {
    #[error("expected exactly one section headed {heading:?}, found {found}")]
    SectionCount { heading: String, found: usize },

    #[error("expected {expected} <p> elements at {location}, found {found}")]
    ParagraphCount {
        location: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("{category} meeting time text changed: expected {expected:?}, found {found:?}")]
    TimeText {
        category: Category,
        expected: &'static str,
        found: String,
    },

    #[error("expected exactly {expected} <ul> elements at {location}, found {found}")]
    ListCount {
        location: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("expected exactly one remote meeting statement <p> at {location}, found {found}")]
    RemoteStatementCount {
        location: &'static str,
        found: usize,
    },

    #[error("remote meeting statement missing: <p> at {location} does not contain {needle:?}, found {found:?}")]
    RemoteStatementMissing {
        location: &'static str,
        needle: &'static str,
        found: String,
    },
}

/// Why a single schedule line produced no date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The line is not a schedule line at all.
    #[error("line does not match the schedule date pattern: {line:?}")]
    NoMatch { line: String },

    /// The line matched, but month and day do not form a date in `year`.
    #[error("{month} {day} is not a valid date in {year}")]
    InvalidCalendarDate {
        year: i32,
        month: String,
        day: String,
    },
}

/// What to do with an [`ParseFailure::InvalidCalendarDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidDatePolicy {
    /// Reject the whole page.
    #[default]
    Abort,
    /// Treat like an unmatched line.
    Skip,
}

/// Effect of a [`ParseFailure`] on the page being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSeverity {
    SkipLine,
    AbortPage,
}

impl ParseFailure {
    pub fn severity(&self, policy: InvalidDatePolicy) -> LineSeverity {
        match (self, policy) {
            (ParseFailure::NoMatch { .. }, _) => LineSeverity::SkipLine,
            (ParseFailure::InvalidCalendarDate { .. }, InvalidDatePolicy::Skip) => {
                LineSeverity::SkipLine
            }
            (ParseFailure::InvalidCalendarDate { .. }, InvalidDatePolicy::Abort) => {
                LineSeverity::AbortPage
            }
        }
    }
}

/// Fatal outcome of parsing one page. No meetings are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page structure changed: {0}")]
    Structure(#[from] StructureFailure),

    #[error("{category} schedule has an invalid date: {failure}")]
    InvalidDate {
        category: Category,
        failure: ParseFailure,
    },
}

/// Failure to load a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("invalid source url {url:?}: {source}")]
    SourceUrl {
        url: String,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_date() -> ParseFailure {
        ParseFailure::InvalidCalendarDate {
            year: 2021,
            month: "February".to_string(),
            day: "30".to_string(),
        }
    }

    #[test]
    fn test_no_match_always_skips() {
        let failure = ParseFailure::NoMatch {
            line: "* footnote".to_string(),
        };
        assert_eq!(failure.severity(InvalidDatePolicy::Abort), LineSeverity::SkipLine);
        assert_eq!(failure.severity(InvalidDatePolicy::Skip), LineSeverity::SkipLine);
    }

    #[test]
    fn test_invalid_date_follows_policy() {
        assert_eq!(
            invalid_date().severity(InvalidDatePolicy::Abort),
            LineSeverity::AbortPage
        );
        assert_eq!(
            invalid_date().severity(InvalidDatePolicy::Skip),
            LineSeverity::SkipLine
        );
    }

    #[test]
    fn test_default_policy_aborts() {
        assert_eq!(InvalidDatePolicy::default(), InvalidDatePolicy::Abort);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            invalid_date().to_string(),
            "February 30 is not a valid date in 2021"
        );

        let page = PageError::from(StructureFailure::SectionCount {
            heading: "Board".to_string(),
            found: 0,
        });
        assert_eq!(
            page.to_string(),
            "page structure changed: expected exactly one section headed \"Board\", found 0"
        );
    }
}
