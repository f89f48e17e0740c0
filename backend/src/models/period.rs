//! Period filters and resolution to concrete intervals.
//!
//! A [`PeriodFilter`] names a dashboard window; [`resolve_period`] turns it
//! into a half-open `[start, end)` UTC interval. Named periods are anchored to
//! an explicit `now` and are period-to-date: the end bound is `now`, not the
//! nominal end of the calendar period.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::calendar::CalendarConfig;

/// Period descriptor for a dashboard section.
///
/// Serialized with a `kind` tag; a `custom` variant missing either bound
/// fails deserialization outright rather than silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodFilter {
    Today,
    Week,
    Month,
    Year,
    Custom {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A resolved half-open `[start, end)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodRange {
    /// Whether `t` falls inside the interval: `start <= t < end`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

/// Start of the calendar day containing `t` (UTC midnight).
pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Start of the week containing `t`, with the week beginning on `week_start`.
pub fn start_of_week(t: DateTime<Utc>, week_start: Weekday) -> DateTime<Utc> {
    let days_back = (7 + t.weekday().num_days_from_monday() as i64
        - week_start.num_days_from_monday() as i64)
        % 7;
    start_of_day(t) - Duration::days(days_back)
}

/// Start of the calendar month containing `t`.
pub fn start_of_month(t: DateTime<Utc>) -> DateTime<Utc> {
    let date = t.date_naive();
    let first = date.with_day(1).unwrap_or(date);
    first.and_time(NaiveTime::MIN).and_utc()
}

/// Start of the calendar year containing `t`.
pub fn start_of_year(t: DateTime<Utc>) -> DateTime<Utc> {
    let date = t.date_naive();
    let first = date.with_ordinal(1).unwrap_or(date);
    first.and_time(NaiveTime::MIN).and_utc()
}

/// Resolve a [`PeriodFilter`] to a concrete interval anchored at `now`.
///
/// Named periods end at `now` (period-to-date). A custom period is taken
/// verbatim; a start bound after the end bound yields
/// [`EngineError::InvalidPeriod`].
pub fn resolve_period(
    filter: &PeriodFilter,
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> EngineResult<PeriodRange> {
    let range = match filter {
        PeriodFilter::Today => PeriodRange {
            start: start_of_day(now),
            end: now,
        },
        PeriodFilter::Week => PeriodRange {
            start: start_of_week(now, config.week_start),
            end: now,
        },
        PeriodFilter::Month => PeriodRange {
            start: start_of_month(now),
            end: now,
        },
        PeriodFilter::Year => PeriodRange {
            start: start_of_year(now),
            end: now,
        },
        PeriodFilter::Custom { start, end } => {
            if start > end {
                return Err(EngineError::invalid_period(format!(
                    "start {} is after end {}",
                    start, end
                )));
            }
            PeriodRange {
                start: *start,
                end: *end,
            }
        }
    };
    Ok(range)
}
