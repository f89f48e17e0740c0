//! Timestamp normalization.
//!
//! Records arrive from the document store with several timestamp shapes: a
//! wrapped epoch value (`{seconds, nanos}`), a native instant, an ISO-like
//! string, an epoch-millisecond number, or nothing at all. [`TimestampLike`]
//! models this as a closed union with a single exhaustive conversion to a UTC
//! instant, so no type-sniffing leaks into call sites.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamp as it appears in a raw record.
///
/// Deserialization is untagged: a map with `seconds`/`nanos` becomes
/// [`Wrapped`](TimestampLike::Wrapped), an RFC 3339 string becomes
/// [`Instant`](TimestampLike::Instant), a bare number becomes
/// [`Millis`](TimestampLike::Millis), any other string becomes
/// [`Text`](TimestampLike::Text), and `null` becomes
/// [`Missing`](TimestampLike::Missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum TimestampLike {
    /// Remote-timestamp wrapper object exposing epoch seconds and nanos.
    Wrapped {
        seconds: i64,
        #[serde(default)]
        nanos: u32,
    },
    /// A native UTC instant.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// An ISO-like textual timestamp, parsed lazily.
    Text(String),
    /// No timestamp present.
    #[default]
    Missing,
}

impl TimestampLike {
    /// Normalize to an absolute UTC instant.
    ///
    /// Unrecognized or missing shapes yield `None` so downstream logic treats
    /// the record as excluded rather than failing. Never panics.
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            TimestampLike::Wrapped { seconds, nanos } => DateTime::from_timestamp(*seconds, *nanos),
            TimestampLike::Instant(dt) => Some(*dt),
            TimestampLike::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            TimestampLike::Text(s) => parse_instant_text(s),
            TimestampLike::Missing => None,
        }
    }

    /// Whether any timestamp value is present (it may still fail to parse).
    pub fn is_present(&self) -> bool {
        !matches!(self, TimestampLike::Missing)
    }
}

impl From<DateTime<Utc>> for TimestampLike {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampLike::Instant(dt)
    }
}

impl From<Option<DateTime<Utc>>> for TimestampLike {
    fn from(dt: Option<DateTime<Utc>>) -> Self {
        match dt {
            Some(dt) => TimestampLike::Instant(dt),
            None => TimestampLike::Missing,
        }
    }
}

/// Parse an ISO-like textual timestamp.
///
/// Accepted forms, tried in order: RFC 3339, `%Y-%m-%dT%H:%M:%S`,
/// `%Y-%m-%d %H:%M:%S`, and a bare `%Y-%m-%d` date (midnight UTC).
fn parse_instant_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}
