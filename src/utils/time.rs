//! Time sources for payload timestamps.
//!
//! `createdAtUtc` is read through the [`Clock`] trait so callers (and tests)
//! can pin the timestamp instead of reading the wall clock.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current UTC time
pub trait Clock: Send + Sync {
    /// Current UTC instant
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `unix_millis` milliseconds after the epoch.
    ///
    /// Out-of-range values fall back to the epoch.
    pub fn from_unix_millis(unix_millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(unix_millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant as ISO-8601 with millisecond precision and a `Z` suffix
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
