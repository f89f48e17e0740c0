//! Input data model for the aggregation engine.
//!
//! These types mirror the loosely-typed records handed over by the fetch
//! layer. The engine never creates, mutates, or persists them; it only reads
//! immutable snapshots passed in per invocation.

pub mod calendar;
pub mod period;
pub mod records;
pub mod time;

pub use calendar::CalendarConfig;
pub use period::{resolve_period, PeriodFilter, PeriodRange};
pub use records::{
    Equipment, ExecutionRecord, Maintainer, OriginFlags, Sector, StoppageEvent, StoppageStatus,
    TaskPriority, TaskTemplate, WorkOrder, WorkOrderClosed,
};
pub use time::TimestampLike;
