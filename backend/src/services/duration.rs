//! Stoppage duration resolution.
//!
//! Stoppages record their duration inconsistently: some carry an explicit
//! minutes figure, some only start/end instants, some only textual `HH:mm`
//! clock times. [`stoppage_minutes`] applies a priority-ordered fallback
//! chain and always returns a non-negative figure.

use chrono::{DateTime, Utc};

use crate::models::records::StoppageEvent;

/// Resolve a stoppage's duration in minutes.
///
/// Priority order, first applicable rule wins:
/// 1. explicit `duration_minutes`, if greater than zero;
/// 2. `finished_at - created_at` when `created_at` is a valid instant; an
///    absent `finished_at` means the stoppage is still open and elapsed time
///    is measured to `now`;
/// 3. `|end - start|` over the textual `HH:mm` clock pair (absolute
///    difference, no overnight wraparound);
/// 4. zero.
///
/// Never negative; malformed clock text falls through to zero.
pub fn stoppage_minutes(event: &StoppageEvent, now: DateTime<Utc>) -> f64 {
    if let Some(minutes) = event.duration_minutes {
        if minutes > 0.0 {
            return minutes;
        }
    }

    if let Some(start) = event.created_at.to_instant() {
        let end = event.finished_at.to_instant().unwrap_or(now);
        let minutes = (end - start).num_seconds() as f64 / 60.0;
        return minutes.max(0.0);
    }

    match (
        event.start_clock.as_deref().and_then(parse_clock_minutes),
        event.end_clock.as_deref().and_then(parse_clock_minutes),
    ) {
        (Some(start), Some(end)) => (end - start).abs() as f64,
        _ => 0.0,
    }
}

/// Parse an `HH:mm` clock time into minutes since midnight.
fn parse_clock_minutes(text: &str) -> Option<i32> {
    let (hours, minutes) = text.trim().split_once(':')?;
    let hours: i32 = hours.trim().parse().ok()?;
    let minutes: i32 = minutes.trim().parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}
