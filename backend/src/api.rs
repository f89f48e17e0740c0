//! Public API surface for the aggregation engine.
//!
//! This file consolidates the DTO types produced and consumed by the engine.
//! All types derive Serialize/Deserialize for JSON interchange with the
//! fetch-layer and presentation-layer collaborators.

pub use crate::models::calendar::CalendarConfig;
pub use crate::models::period::{PeriodFilter, PeriodRange};
pub use crate::models::records::{
    Equipment, ExecutionRecord, Maintainer, OriginFlags, Sector, StoppageEvent, StoppageStatus,
    TaskPriority, TaskTemplate, WorkOrder, WorkOrderClosed,
};
pub use crate::models::time::TimestampLike;

pub use crate::services::buckets::BucketPoint;
pub use crate::services::dashboard::{
    DashboardData, DashboardInput, DashboardTotals, PreventiveSummary, SectorReliability,
    WorkOrderSummary,
};
pub use crate::services::grouping::GroupEntry;
pub use crate::services::reliability::ReliabilityMetrics;

use serde::{Deserialize, Serialize};

/// Stoppage event identifier (document id).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoppageId(pub String);

/// Preventive execution identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionId(pub String);

/// Work order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkOrderId(pub String);

/// Task template identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl StoppageId {
    pub fn new(value: impl Into<String>) -> Self {
        StoppageId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ExecutionId {
    pub fn new(value: impl Into<String>) -> Self {
        ExecutionId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl WorkOrderId {
    pub fn new(value: impl Into<String>) -> Self {
        WorkOrderId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TemplateId {
    pub fn new(value: impl Into<String>) -> Self {
        TemplateId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoppageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
