//! Injected source of "now".
//!
//! Schedule lines carry no year and meeting status depends on the current
//! time, so every parse takes a [`Clock`] instead of reading the system time
//! directly. Production uses [`SystemClock`]; tests and `--now` use
//! [`FixedClock`].

use chrono::{Datelike, Local, NaiveDateTime};

/// Provides the current local wall time.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// The year assigned to year-less schedule lines.
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Reads the machine's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_year() {
        let at = NaiveDate::from_ymd_opt(2021, 1, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.current_year(), 2021);
    }

    #[test]
    fn test_system_clock_is_recent() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
