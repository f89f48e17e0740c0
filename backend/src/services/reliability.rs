//! Reliability metrics: MTTR, MTBF, availability, resolution rate.
//!
//! All rates and means short-circuit division by zero to a documented
//! default: `0` where the metric measures a numerator (MTTR, MTBF,
//! attainment), `100` where an empty denominator means "no problem found"
//! (availability, resolution rate).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::calendar::CalendarConfig;
use crate::models::records::{Equipment, ExecutionRecord, StoppageEvent};
use crate::services::duration::stoppage_minutes;

/// Reliability indicators for one filtered population of stoppages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityMetrics {
    /// Mean time to repair, minutes per breakdown.
    pub mttr_minutes: f64,
    /// Mean time between failures, minutes of uptime per breakdown.
    pub mtbf_minutes: f64,
    /// Planned operating time not lost to downtime, `[0, 100]`.
    pub availability_pct: f64,
    /// Availability relative to the configured target, `[0, 100]`, rounded.
    pub target_attainment_pct: f64,
    /// Share of stoppages resolved, `[0, 100]`.
    pub resolution_rate_pct: f64,
    pub total_downtime_minutes: f64,
    pub breakdown_count: usize,
    pub resolved_count: usize,
    pub planned_minutes: f64,
}

/// Clamp a percentage into `[0, 100]`.
pub fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Mean time to repair. Zero breakdowns yields 0, not NaN.
pub fn mttr(total_downtime_minutes: f64, breakdown_count: usize) -> f64 {
    if breakdown_count == 0 {
        return 0.0;
    }
    total_downtime_minutes / breakdown_count as f64
}

/// Mean time between failures over the planned operating window.
/// Zero breakdowns yields 0; never negative.
pub fn mtbf(planned_minutes: f64, total_downtime_minutes: f64, breakdown_count: usize) -> f64 {
    if breakdown_count == 0 {
        return 0.0;
    }
    ((planned_minutes - total_downtime_minutes) / breakdown_count as f64).max(0.0)
}

/// Availability percentage. A zero planned window means nothing was lost,
/// so availability is 100.
pub fn availability_pct(planned_minutes: f64, total_downtime_minutes: f64) -> f64 {
    if planned_minutes == 0.0 {
        return 100.0;
    }
    clamp_pct((planned_minutes - total_downtime_minutes) / planned_minutes * 100.0)
}

/// Attainment of the availability target, rounded. A zero target yields 0.
pub fn target_attainment_pct(availability_pct: f64, target_pct: f64) -> f64 {
    if target_pct == 0.0 {
        return 0.0;
    }
    clamp_pct((availability_pct / target_pct * 100.0).round())
}

/// Resolution rate. An empty population is treated as fully resolved (100).
pub fn resolution_rate_pct(resolved_count: usize, total_count: usize) -> f64 {
    if total_count == 0 {
        return 100.0;
    }
    clamp_pct(resolved_count as f64 / total_count as f64 * 100.0)
}

/// Planned operating minutes: `distinct_active_days * minutes_per_shift`.
///
/// A calendar day counts as active when either a stoppage or a preventive
/// execution was recorded on it. The coupling between the two collections is
/// intentional: a day with only preventive work still ran the plant.
pub fn planned_minutes(
    stoppages: &[&StoppageEvent],
    executions: &[&ExecutionRecord],
    minutes_per_shift: f64,
) -> f64 {
    let mut active_days: HashSet<NaiveDate> = HashSet::new();
    for stoppage in stoppages {
        if let Some(t) = stoppage.created_at.to_instant() {
            active_days.insert(t.date_naive());
        }
    }
    for execution in executions {
        if let Some(t) = execution.executed_at.to_instant() {
            active_days.insert(t.date_naive());
        }
    }
    active_days.len() as f64 * minutes_per_shift
}

/// Simplified OEE proxy: the share of rostered equipment currently active.
/// An empty roster reads as 100 (nothing is known to be down).
pub fn oee_proxy_pct(equipment: &[Equipment]) -> f64 {
    if equipment.is_empty() {
        return 100.0;
    }
    let active = equipment.iter().filter(|e| e.active).count();
    clamp_pct(active as f64 / equipment.len() as f64 * 100.0)
}

/// Compute the full reliability block for a filtered population.
pub fn compute_reliability(
    stoppages: &[&StoppageEvent],
    executions: &[&ExecutionRecord],
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> ReliabilityMetrics {
    let breakdown_count = stoppages.len();
    let resolved_count = stoppages.iter().filter(|s| s.status.is_resolved()).count();
    let total_downtime_minutes: f64 = stoppages.iter().map(|s| stoppage_minutes(s, now)).sum();
    let planned = planned_minutes(stoppages, executions, config.minutes_per_shift);

    let availability = availability_pct(planned, total_downtime_minutes);

    ReliabilityMetrics {
        mttr_minutes: mttr(total_downtime_minutes, breakdown_count),
        mtbf_minutes: mtbf(planned, total_downtime_minutes, breakdown_count),
        availability_pct: availability,
        target_attainment_pct: target_attainment_pct(availability, config.target_availability_pct),
        resolution_rate_pct: resolution_rate_pct(resolved_count, breakdown_count),
        total_downtime_minutes,
        breakdown_count,
        resolved_count,
        planned_minutes: planned,
    }
}
