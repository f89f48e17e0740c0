use chrono::{DateTime, TimeZone, Utc};

use opsdash_rust::api::{
    CalendarConfig, DashboardInput, ExecutionId, ExecutionRecord, OriginFlags, PeriodFilter,
    StoppageEvent, StoppageId, StoppageStatus, TimestampLike,
};
use opsdash_rust::models::period::resolve_period;
use opsdash_rust::services::{
    compute_dashboard_data, filter_by_period, group_count, key_or_default, top_n, OTHER_KEY,
};
use opsdash_rust::services::grouping::group_sum;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
}

fn stoppage_explicit(id: &str, sector: &str, minutes: f64) -> StoppageEvent {
    StoppageEvent {
        id: StoppageId::new(id),
        sector: Some(sector.to_string()),
        equipment: None,
        maintenance_type: None,
        status: StoppageStatus::Done,
        origin: OriginFlags::default(),
        duration_minutes: Some(minutes),
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap().into(),
        finished_at: TimestampLike::Missing,
        start_clock: None,
        end_clock: None,
    }
}

fn empty_input<'a>() -> DashboardInput<'a> {
    DashboardInput {
        stoppages: &[],
        executions: &[],
        open_orders: &[],
        closed_orders: &[],
        templates: &[],
        equipment: &[],
        sectors: &[],
        maintainers: &[],
    }
}

/// Scenario A: three Press stoppages filtered to "today" — one explicit 30,
/// one falling back to instants (20 minutes), one explicit 50. Total downtime
/// 100 minutes, MTTR rounds to 33.
#[test]
fn test_scenario_a_press_sector_today() {
    let fallback = StoppageEvent {
        duration_minutes: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap().into(),
        finished_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 20, 0).unwrap().into(),
        ..stoppage_explicit("stp-2", "Press", 0.0)
    };
    let stoppages = vec![
        stoppage_explicit("stp-1", "Press", 30.0),
        fallback,
        stoppage_explicit("stp-3", "Press", 50.0),
    ];
    let input = DashboardInput {
        stoppages: &stoppages,
        ..empty_input()
    };

    let data = compute_dashboard_data(
        &input,
        &PeriodFilter::Today,
        &CalendarConfig::default(),
        fixed_now(),
    )
    .unwrap();

    assert_eq!(data.totals.stoppage_count, 3);
    assert_eq!(data.reliability.total_downtime_minutes, 100.0);
    assert_eq!(data.reliability.breakdown_count, 3);
    assert_eq!(data.reliability.mttr_minutes.round(), 33.0);
    assert_eq!(data.stoppages_by_sector.len(), 1);
    assert_eq!(data.stoppages_by_sector[0].name, "Press");
    assert_eq!(data.stoppages_by_sector[0].value, 3.0);
}

/// Scenario B: empty stoppage collection and zero planned minutes — the
/// no-problem-found defaults apply everywhere.
#[test]
fn test_scenario_b_empty_collection_defaults() {
    let data = compute_dashboard_data(
        &empty_input(),
        &PeriodFilter::Today,
        &CalendarConfig::default(),
        fixed_now(),
    )
    .unwrap();

    assert_eq!(data.reliability.planned_minutes, 0.0);
    assert_eq!(data.reliability.availability_pct, 100.0);
    assert_eq!(data.reliability.resolution_rate_pct, 100.0);
    assert_eq!(data.reliability.mttr_minutes, 0.0);
    assert_eq!(data.reliability.mtbf_minutes, 0.0);
}

/// Scenario C: ranking 8 sectors with distinct counts, top-5 keeps exactly
/// the five largest in descending order.
#[test]
fn test_scenario_c_top_5_of_8_sectors() {
    let sectors = ["S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7"];
    let mut stoppages = Vec::new();
    for (i, sector) in sectors.into_iter().enumerate() {
        for j in 0..(10 - i) {
            stoppages.push(stoppage_explicit(
                &format!("stp-{}-{}", i, j),
                sector,
                5.0,
            ));
        }
    }
    let refs: Vec<&StoppageEvent> = stoppages.iter().collect();
    let ranked = top_n(
        group_count(&refs, |s| key_or_default(s.sector.as_deref(), OTHER_KEY)),
        5,
    );

    assert_eq!(ranked.len(), 5);
    let names: Vec<_> = ranked.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["S0", "S1", "S2", "S3", "S4"]);
    let values: Vec<f64> = ranked.iter().map(|g| g.value).collect();
    assert_eq!(values, vec![10.0, 9.0, 8.0, 7.0, 6.0]);
}

/// A record stamped exactly at the resolved end bound is excluded; exactly at
/// the start bound is included.
#[test]
fn test_period_boundary_semantics_end_to_end() {
    let config = CalendarConfig::default();
    let now = fixed_now();
    let range = resolve_period(&PeriodFilter::Today, &config, now).unwrap();

    let at_start = StoppageEvent {
        created_at: range.start.into(),
        ..stoppage_explicit("stp-start", "Press", 10.0)
    };
    let at_end = StoppageEvent {
        created_at: range.end.into(),
        ..stoppage_explicit("stp-end", "Press", 10.0)
    };
    let stoppages = vec![at_start, at_end];

    let kept = filter_by_period(&stoppages, &range, |s| &s.created_at);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id.value(), "stp-start");
}

/// Grouping conservation: before truncation the group values sum to the
/// size of the filtered input, whatever the key distribution looks like.
#[test]
fn test_grouping_conservation() {
    let stoppages = vec![
        stoppage_explicit("a", "Press", 5.0),
        stoppage_explicit("b", "Paint", 5.0),
        StoppageEvent {
            sector: None,
            ..stoppage_explicit("c", "", 5.0)
        },
        stoppage_explicit("d", "Press", 5.0),
    ];
    let refs: Vec<&StoppageEvent> = stoppages.iter().collect();
    let groups = group_count(&refs, |s| key_or_default(s.sector.as_deref(), OTHER_KEY));
    let total: f64 = groups.iter().map(|g| g.value).sum();
    assert_eq!(total, stoppages.len() as f64);

    let with_measure = group_sum(
        &refs,
        |s| key_or_default(s.sector.as_deref(), OTHER_KEY),
        |s| s.duration_minutes.unwrap_or(0.0),
    );
    let measure_total: f64 = with_measure.iter().map(|g| g.value).sum();
    assert_eq!(measure_total, 20.0);
}

/// Two dashboard sections may run independent filters over one snapshot.
#[test]
fn test_independent_filters_over_one_snapshot() {
    let today = stoppage_explicit("today", "Press", 30.0);
    let last_month = StoppageEvent {
        created_at: Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap().into(),
        ..stoppage_explicit("feb", "Press", 60.0)
    };
    let stoppages = vec![today, last_month];
    let input = DashboardInput {
        stoppages: &stoppages,
        ..empty_input()
    };
    let config = CalendarConfig::default();

    let today_view =
        compute_dashboard_data(&input, &PeriodFilter::Today, &config, fixed_now()).unwrap();
    let year_view =
        compute_dashboard_data(&input, &PeriodFilter::Year, &config, fixed_now()).unwrap();

    assert_eq!(today_view.totals.stoppage_count, 1);
    assert_eq!(year_view.totals.stoppage_count, 2);
    assert_eq!(year_view.reliability.total_downtime_minutes, 90.0);
}

/// Preventive executions alone make a day "active" for planned minutes.
#[test]
fn test_planned_minutes_coupling_through_dashboard() {
    let executions = vec![ExecutionRecord {
        id: ExecutionId::new("e1"),
        executed_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap().into(),
        estimated_minutes: 60.0,
        actual_minutes: 60.0,
        technician: Some("Alex".to_string()),
        equipment: None,
    }];
    let input = DashboardInput {
        executions: &executions,
        ..empty_input()
    };
    let data = compute_dashboard_data(
        &input,
        &PeriodFilter::Today,
        &CalendarConfig::default(),
        fixed_now(),
    )
    .unwrap();

    // One active day even with zero stoppages.
    assert_eq!(data.reliability.planned_minutes, 480.0);
    assert_eq!(data.reliability.availability_pct, 100.0);
}
