//! Injected current-time access.
//!
//! The validator and backup codec default absent `date`/`createdAt` fields
//! to "now" and stamp exports with the export instant. Time is injected
//! through the [`Clock`] trait so tests can pin it and get byte-identical
//! output.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock: core::fmt::Debug + Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant as an ISO-8601 string with millisecond
    /// precision and a trailing `Z`, e.g. `2024-01-15T10:30:00.000Z`.
    #[inline]
    fn iso_instant(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Returns the current calendar date as `YYYY-MM-DD`.
    #[inline]
    fn iso_date(&self) -> String {
        self.now().date_naive().to_string()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The instant this clock always reports.
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[inline]
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let instant = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn iso_instant_has_millisecond_precision() {
        let instant = DateTime::from_timestamp(1_706_745_600, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.iso_instant(), "2024-02-01T00:00:00.000Z");
    }

    #[test]
    fn iso_date_is_calendar_day() {
        let instant = DateTime::from_timestamp(1_706_745_600, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.iso_date(), "2024-02-01");
    }

    #[test]
    fn system_clock_is_roughly_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();
        assert!(now >= before && now <= after);
    }
}
