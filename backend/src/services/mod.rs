//! Service layer: the aggregation functions.
//!
//! Each submodule is a set of pure functions over immutable record slices.
//! `dashboard` orchestrates them into a single bundle for the presentation
//! layer.

pub mod buckets;
pub mod dashboard;
pub mod duration;
pub mod filtering;
pub mod grouping;
pub mod reliability;

pub use buckets::{
    day_of_week_distribution, last_4_weeks_series, last_6_months_series, last_7_days_series,
};
pub use dashboard::compute_dashboard_data;
pub use duration::stoppage_minutes;
pub use filtering::filter_by_period;
pub use grouping::{group_count, group_sum, key_or_default, top_n, OTHER_KEY};
pub use reliability::compute_reliability;
