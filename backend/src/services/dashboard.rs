//! Dashboard orchestration.
//!
//! [`compute_dashboard_data`] resolves the period once, narrows every
//! collection with the temporal filter, and assembles the full aggregate
//! bundle the presentation layer renders. It is the only function most
//! callers need.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::calendar::CalendarConfig;
use crate::models::period::{resolve_period, PeriodFilter, PeriodRange};
use crate::models::records::{
    Equipment, ExecutionRecord, Maintainer, Sector, StoppageEvent, TaskTemplate, WorkOrder,
    WorkOrderClosed,
};
use crate::services::buckets::{
    day_of_week_distribution, last_4_weeks_series, last_6_months_series, last_7_days_series,
    BucketPoint,
};
use crate::services::duration::stoppage_minutes;
use crate::services::filtering::filter_by_period;
use crate::services::grouping::{group_count, group_sum, key_or_default, top_n, GroupEntry, OTHER_KEY};
use crate::services::reliability::{
    compute_reliability, oee_proxy_pct, ReliabilityMetrics,
};

/// How many equipment entries the downtime ranking keeps.
const TOP_EQUIPMENT: usize = 5;

/// Read-only snapshot of every collection the engine consumes.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    pub stoppages: &'a [StoppageEvent],
    pub executions: &'a [ExecutionRecord],
    pub open_orders: &'a [WorkOrder],
    pub closed_orders: &'a [WorkOrderClosed],
    pub templates: &'a [TaskTemplate],
    pub equipment: &'a [Equipment],
    pub sectors: &'a [Sector],
    pub maintainers: &'a [Maintainer],
}

/// Scalar totals over the filtered period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub stoppage_count: usize,
    pub resolved_stoppage_count: usize,
    pub open_order_count: usize,
    pub closed_order_count: usize,
    pub execution_count: usize,
    pub active_template_count: usize,
    pub active_maintainer_count: usize,
    pub daily_capacity_minutes: f64,
    pub total_downtime_minutes: f64,
}

/// Preventive-maintenance execution summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventiveSummary {
    pub execution_count: usize,
    pub total_estimated_minutes: f64,
    pub total_actual_minutes: f64,
    /// Share of executions finished within their estimate, `[0, 100]`.
    /// An empty period reads as fully adherent (100).
    pub adherence_pct: f64,
}

/// Work-order backlog summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderSummary {
    pub open_count: usize,
    pub closed_count: usize,
    pub open_by_sector: Vec<GroupEntry>,
    /// Mean duration of closed orders that recorded one; 0 when none did.
    pub mean_closure_minutes: f64,
}

/// Per-sector reliability block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorReliability {
    pub name: String,
    pub metrics: ReliabilityMetrics,
}

/// The full aggregate bundle for one dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub period: PeriodRange,
    pub totals: DashboardTotals,
    pub reliability: ReliabilityMetrics,
    pub reliability_by_sector: Vec<SectorReliability>,
    pub oee_pct: f64,
    pub stoppages_by_sector: Vec<GroupEntry>,
    pub stoppages_by_status: Vec<GroupEntry>,
    pub stoppages_by_origin: Vec<GroupEntry>,
    pub downtime_by_equipment_top: Vec<GroupEntry>,
    pub downtime_last_7_days: Vec<BucketPoint>,
    pub stoppages_last_4_weeks: Vec<BucketPoint>,
    pub stoppages_last_6_months: Vec<BucketPoint>,
    pub stoppages_by_weekday: Vec<BucketPoint>,
    pub executions_by_technician: Vec<GroupEntry>,
    pub executions_by_equipment: Vec<GroupEntry>,
    pub preventive: PreventiveSummary,
    pub work_orders: WorkOrderSummary,
    pub templates_by_priority: Vec<GroupEntry>,
    pub templates_by_type: Vec<GroupEntry>,
}

/// Count stoppages per origin flag. A stoppage may carry several flags; one
/// with none set counts under `other`.
fn origin_distribution(stoppages: &[&StoppageEvent]) -> Vec<GroupEntry> {
    let labels = ["electrical", "mechanical", "automation", "third_party", "other"];
    let mut counts = [0usize; 5];

    for stoppage in stoppages {
        let active = stoppage.origin.active_labels();
        if active.is_empty() {
            counts[4] += 1;
            continue;
        }
        for label in active {
            if let Some(slot) = labels.iter().position(|l| *l == label) {
                counts[slot] += 1;
            }
        }
    }

    let mut groups: Vec<GroupEntry> = labels
        .iter()
        .zip(counts)
        .map(|(label, count)| GroupEntry {
            name: (*label).to_string(),
            value: count as f64,
        })
        .collect();
    groups.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    groups
}

/// Preventive adherence: executions whose actual duration stayed within the
/// estimate, over all executions in the period.
fn preventive_summary(executions: &[&ExecutionRecord]) -> PreventiveSummary {
    let execution_count = executions.len();
    let total_estimated_minutes: f64 = executions.iter().map(|e| e.estimated_minutes).sum();
    let total_actual_minutes: f64 = executions.iter().map(|e| e.actual_minutes).sum();
    let adherence_pct = if execution_count == 0 {
        100.0
    } else {
        let adherent = executions
            .iter()
            .filter(|e| e.actual_minutes <= e.estimated_minutes)
            .count();
        (adherent as f64 / execution_count as f64 * 100.0).clamp(0.0, 100.0)
    };

    PreventiveSummary {
        execution_count,
        total_estimated_minutes,
        total_actual_minutes,
        adherence_pct,
    }
}

fn work_order_summary(
    open_orders: &[&WorkOrder],
    closed_orders: &[&WorkOrderClosed],
) -> WorkOrderSummary {
    let durations: Vec<f64> = closed_orders
        .iter()
        .filter_map(|o| o.total_minutes)
        .map(|m| m.max(0.0))
        .collect();
    let mean_closure_minutes = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    WorkOrderSummary {
        open_count: open_orders.len(),
        closed_count: closed_orders.len(),
        open_by_sector: group_count(open_orders, |o| {
            key_or_default(o.sector.as_deref(), OTHER_KEY)
        }),
        mean_closure_minutes,
    }
}

/// Per-sector reliability, seeded from the active sector roster so sectors
/// with a quiet period still appear, then extended with any sector keys seen
/// only on the stoppages themselves.
fn reliability_by_sector(
    sectors: &[Sector],
    stoppages: &[&StoppageEvent],
    executions: &[&ExecutionRecord],
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> Vec<SectorReliability> {
    let mut names: Vec<String> = sectors
        .iter()
        .filter(|s| s.active)
        .map(|s| s.name.clone())
        .collect();
    for stoppage in stoppages {
        let key = key_or_default(stoppage.sector.as_deref(), OTHER_KEY);
        if !names.contains(&key) {
            names.push(key);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let subset: Vec<&StoppageEvent> = stoppages
                .iter()
                .filter(|s| key_or_default(s.sector.as_deref(), OTHER_KEY) == name)
                .copied()
                .collect();
            // Preventive executions carry no sector, so the planned-minutes
            // day pool is shared across sectors.
            let metrics = compute_reliability(&subset, executions, config, now);
            SectorReliability { name, metrics }
        })
        .collect()
}

/// Compute every dashboard aggregate for one period filter.
///
/// Pure given `now`: identical inputs and the same `now` always produce the
/// same output. Multiple dashboard sections may call this with independent
/// filters over the same snapshot.
pub fn compute_dashboard_data(
    input: &DashboardInput<'_>,
    filter: &PeriodFilter,
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> EngineResult<DashboardData> {
    let period = resolve_period(filter, config, now)?;

    let stoppages = filter_by_period(input.stoppages, &period, |s| &s.created_at);
    let executions = filter_by_period(input.executions, &period, |e| &e.executed_at);
    let open_orders = filter_by_period(input.open_orders, &period, |o| &o.created_at);
    let closed_orders = filter_by_period(input.closed_orders, &period, |o| &o.closed_at);

    debug!(
        "dashboard aggregation: {} stoppages, {} executions, {} open / {} closed orders in period",
        stoppages.len(),
        executions.len(),
        open_orders.len(),
        closed_orders.len()
    );

    let reliability = compute_reliability(&stoppages, &executions, config, now);
    let total_downtime_minutes = reliability.total_downtime_minutes;

    let active_templates: Vec<&TaskTemplate> =
        input.templates.iter().filter(|t| t.active).collect();
    let active_maintainers: Vec<&Maintainer> =
        input.maintainers.iter().filter(|m| m.active).collect();

    let totals = DashboardTotals {
        stoppage_count: stoppages.len(),
        resolved_stoppage_count: stoppages.iter().filter(|s| s.status.is_resolved()).count(),
        open_order_count: open_orders.len(),
        closed_order_count: closed_orders.len(),
        execution_count: executions.len(),
        active_template_count: active_templates.len(),
        active_maintainer_count: active_maintainers.len(),
        daily_capacity_minutes: active_maintainers
            .iter()
            .map(|m| m.daily_capacity_minutes)
            .sum(),
        total_downtime_minutes,
    };

    let data = DashboardData {
        period,
        reliability_by_sector: reliability_by_sector(
            input.sectors,
            &stoppages,
            &executions,
            config,
            now,
        ),
        reliability,
        oee_pct: oee_proxy_pct(input.equipment),
        stoppages_by_sector: group_count(&stoppages, |s| {
            key_or_default(s.sector.as_deref(), OTHER_KEY)
        }),
        stoppages_by_status: group_count(&stoppages, |s| s.status.label().to_string()),
        stoppages_by_origin: origin_distribution(&stoppages),
        downtime_by_equipment_top: top_n(
            group_sum(
                &stoppages,
                |s| key_or_default(s.equipment.as_deref(), OTHER_KEY),
                |s| stoppage_minutes(s, now),
            ),
            TOP_EQUIPMENT,
        ),
        downtime_last_7_days: last_7_days_series(
            &stoppages,
            |s| &s.created_at,
            |s| stoppage_minutes(s, now),
            config,
            now,
        ),
        stoppages_last_4_weeks: last_4_weeks_series(
            &stoppages,
            |s| &s.created_at,
            |_| 1.0,
            config,
            now,
        ),
        stoppages_last_6_months: last_6_months_series(
            &stoppages,
            |s| &s.created_at,
            |_| 1.0,
            config,
            now,
        ),
        stoppages_by_weekday: day_of_week_distribution(
            &stoppages,
            |s| &s.created_at,
            |_| 1.0,
            config,
        ),
        executions_by_technician: group_count(&executions, |e| {
            key_or_default(e.technician.as_deref(), OTHER_KEY)
        }),
        executions_by_equipment: group_count(&executions, |e| {
            key_or_default(e.equipment.as_deref(), OTHER_KEY)
        }),
        preventive: preventive_summary(&executions),
        work_orders: work_order_summary(&open_orders, &closed_orders),
        templates_by_priority: group_count(&active_templates, |t| {
            t.priority.unwrap_or_default().label().to_string()
        }),
        templates_by_type: group_count(&active_templates, |t| {
            key_or_default(t.maintenance_type.as_deref(), OTHER_KEY)
        }),
        totals,
    };

    Ok(data)
}
