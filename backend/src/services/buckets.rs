//! Fixed-shape time-bucketed series.
//!
//! Every series is zero-seeded: all bucket labels are present in the output
//! even when no record lands in them, so empty days render as `0` rather
//! than as a gap. Lookback windows are measured backward from an explicit
//! `now`; records outside the window are silently dropped from the series.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::calendar::CalendarConfig;
use crate::models::period::start_of_week;
use crate::models::time::TimestampLike;

/// A single `{label, value}` point in a bucketed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketPoint {
    pub label: String,
    pub value: f64,
}

/// Series over the last 7 calendar days, keyed by weekday short label,
/// ordered oldest to newest (today last).
pub fn last_7_days_series<T>(
    records: &[&T],
    instant: impl Fn(&T) -> &TimestampLike,
    measure: impl Fn(&T) -> f64,
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> Vec<BucketPoint> {
    let first_day = now.date_naive() - Duration::days(6);
    let mut series: Vec<BucketPoint> = (0..7)
        .map(|offset| BucketPoint {
            label: config
                .weekday_label((first_day + Duration::days(offset)).weekday())
                .to_string(),
            value: 0.0,
        })
        .collect();

    for &record in records {
        let Some(t) = instant(record).to_instant() else {
            continue;
        };
        if t > now {
            continue;
        }
        let offset = (t.date_naive() - first_day).num_days();
        if (0..7).contains(&offset) {
            series[offset as usize].value += measure(record);
        }
    }
    series
}

/// Series over the last 4 weeks, keyed `"Week 1"` (oldest) to `"Week 4"`
/// (the week containing `now`). Week boundaries follow `config.week_start`.
pub fn last_4_weeks_series<T>(
    records: &[&T],
    instant: impl Fn(&T) -> &TimestampLike,
    measure: impl Fn(&T) -> f64,
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> Vec<BucketPoint> {
    let window_start = start_of_week(now, config.week_start) - Duration::weeks(3);
    let mut series: Vec<BucketPoint> = (1..=4)
        .map(|n| BucketPoint {
            label: format!("Week {}", n),
            value: 0.0,
        })
        .collect();

    for &record in records {
        let Some(t) = instant(record).to_instant() else {
            continue;
        };
        if t > now || t < window_start {
            continue;
        }
        let week = (t.date_naive() - window_start.date_naive()).num_days() / 7;
        if (0..4).contains(&week) {
            series[week as usize].value += measure(record);
        }
    }
    series
}

/// Series over the last 6 calendar months, keyed by month abbreviation,
/// ordered oldest to newest (current month last).
pub fn last_6_months_series<T>(
    records: &[&T],
    instant: impl Fn(&T) -> &TimestampLike,
    measure: impl Fn(&T) -> f64,
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> Vec<BucketPoint> {
    // Months counted on a flat year*12 + month axis to survive year rollover.
    let current = now.year() as i64 * 12 + now.month0() as i64;
    let oldest = current - 5;

    let mut series: Vec<BucketPoint> = (oldest..=current)
        .map(|month_index| BucketPoint {
            label: config.month_label(month_index.rem_euclid(12) as u32).to_string(),
            value: 0.0,
        })
        .collect();

    for &record in records {
        let Some(t) = instant(record).to_instant() else {
            continue;
        };
        if t > now {
            continue;
        }
        let month_index = t.year() as i64 * 12 + t.month0() as i64;
        let offset = month_index - oldest;
        if (0..6).contains(&offset) {
            series[offset as usize].value += measure(record);
        }
    }
    series
}

/// Distribution over all 7 weekdays, Monday first, with no lookback window.
///
/// Callers narrow the input with the temporal filter beforehand; this only
/// classifies by weekday.
pub fn day_of_week_distribution<T>(
    records: &[&T],
    instant: impl Fn(&T) -> &TimestampLike,
    measure: impl Fn(&T) -> f64,
    config: &CalendarConfig,
) -> Vec<BucketPoint> {
    let mut series: Vec<BucketPoint> = config
        .weekday_labels
        .iter()
        .map(|label| BucketPoint {
            label: label.clone(),
            value: 0.0,
        })
        .collect();

    for &record in records {
        let Some(t) = instant(record).to_instant() else {
            continue;
        };
        let slot = t.weekday().num_days_from_monday() as usize;
        series[slot].value += measure(record);
    }
    series
}
