//! Time as an injected port, plus timestamp formatting and parsing.
//!
//! Stores stamp records via a [`Clock`] rather than calling `Utc::now()`
//! directly, so tests get stable timestamps. The canonical on-disk form is
//! RFC 3339; legacy exports carry locale-style strings, and both read paths
//! are accepted wherever a timestamp actually needs interpreting.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Source of "now" for record timestamping.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock, backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests.
#[derive(Debug)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant in the canonical stored form (RFC 3339, UTC).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Locale-style forms seen in legacy exports.
const LEGACY_FORMATS: [&str; 2] = ["%m/%d/%Y, %I:%M:%S %p", "%d/%m/%Y, %H:%M:%S"];

/// Interpret a stored timestamp string.
///
/// Accepts RFC 3339 and the legacy locale-style forms; anything else is
/// `None`. Timestamps are otherwise opaque data, so this is only used where
/// ordering by time is required.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    for format in LEGACY_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}
