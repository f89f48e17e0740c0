//! # Operations Dashboard Rust Backend
//!
//! Maintenance analytics aggregation engine for the operations dashboard.
//!
//! This crate derives time-bucketed, dimensionally-grouped reliability metrics
//! (MTTR, MTBF, availability, resolution rate, top-N rankings) from raw
//! operational records: machine stoppages, preventive-maintenance executions,
//! work orders, task templates, and equipment/sector/technician rosters.
//!
//! ## Features
//!
//! - **Timestamp Normalization**: Reconcile heterogeneous timestamp shapes
//!   (wrapped epoch values, native instants, ISO-like strings) into UTC instants
//! - **Period Resolution**: Named period-to-date windows (today/week/month/year)
//!   and explicit custom ranges, always half-open `[start, end)`
//! - **Bucketing**: Zero-seeded last-7-days, last-4-weeks, last-6-months and
//!   day-of-week series
//! - **Grouping**: Dimensional grouping with top-N ranking and a uniform
//!   "Other" fallback for missing keys
//! - **Reliability Metrics**: MTTR, MTBF, availability vs. target, resolution
//!   rate, with documented zero-guards throughout
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated DTO surface and record identifiers
//! - [`models`]: Input record types, timestamp normalization, period filters
//! - [`services`]: The aggregation functions and dashboard orchestration
//! - [`error`]: Engine error types
//!
//! Every function is a deterministic, side-effect-free transformation over
//! immutable in-memory snapshots. Data acquisition and presentation belong to
//! external collaborators; "now" is threaded explicitly so results are
//! reproducible under test.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
