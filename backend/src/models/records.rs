//! Raw operational record types.
//!
//! These are snapshots of document-store records. Optional fields are
//! pervasive: the engine tolerates missing sectors, equipment names, durations,
//! and timestamps, falling back to the documented defaults instead of dropping
//! records.

use serde::{Deserialize, Serialize};

use crate::api::{ExecutionId, StoppageId, TemplateId, WorkOrderId};
use crate::models::time::TimestampLike;

/// Lifecycle status of a stoppage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoppageStatus {
    Pending,
    InProgress,
    Done,
    Cancelled,
}

impl StoppageStatus {
    /// Whether the stoppage counts as resolved for resolution-rate purposes.
    pub fn is_resolved(&self) -> bool {
        matches!(self, StoppageStatus::Done)
    }

    /// Stable label used as a grouping key.
    pub fn label(&self) -> &'static str {
        match self {
            StoppageStatus::Pending => "pending",
            StoppageStatus::InProgress => "in_progress",
            StoppageStatus::Done => "done",
            StoppageStatus::Cancelled => "cancelled",
        }
    }
}

/// Task template priority. Missing or unrecognized priorities coerce to `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Critical,
    High,
    Medium,
    #[default]
    Low,
}

impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unknown priority strings coerce to the default instead of failing
        // the whole record.
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "critical" => TaskPriority::Critical,
            "high" => TaskPriority::High,
            "medium" => TaskPriority::Medium,
            _ => TaskPriority::Low,
        })
    }
}

impl TaskPriority {
    /// Stable label used as a grouping key.
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Critical => "critical",
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

/// Stoppage origin flags. A stoppage may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OriginFlags {
    #[serde(default)]
    pub electrical: bool,
    #[serde(default)]
    pub mechanical: bool,
    #[serde(default)]
    pub automation: bool,
    #[serde(default)]
    pub third_party: bool,
    #[serde(default)]
    pub other: bool,
}

impl OriginFlags {
    /// Labels of the flags that are set, in declaration order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        let pairs = [
            (self.electrical, "electrical"),
            (self.mechanical, "mechanical"),
            (self.automation, "automation"),
            (self.third_party, "third_party"),
            (self.other, "other"),
        ];
        pairs
            .into_iter()
            .filter_map(|(set, label)| set.then_some(label))
            .collect()
    }
}

/// A machine stoppage event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoppageEvent {
    pub id: StoppageId,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub maintenance_type: Option<String>,
    pub status: StoppageStatus,
    #[serde(default)]
    pub origin: OriginFlags,
    /// Explicit duration in minutes, when the operator recorded one.
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub created_at: TimestampLike,
    #[serde(default)]
    pub finished_at: TimestampLike,
    /// Textual `HH:mm` clock times, the lowest-priority duration source.
    #[serde(default)]
    pub start_clock: Option<String>,
    #[serde(default)]
    pub end_clock: Option<String>,
}

/// A preventive-maintenance execution log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: ExecutionId,
    #[serde(default)]
    pub executed_at: TimestampLike,
    #[serde(default)]
    pub estimated_minutes: f64,
    #[serde(default)]
    pub actual_minutes: f64,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
}

/// An open work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub created_at: TimestampLike,
}

/// A closed work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderClosed {
    pub id: WorkOrderId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub closed_at: TimestampLike,
    /// Total duration in minutes, when recorded at closure.
    #[serde(default)]
    pub total_minutes: Option<f64>,
}

/// A preventive task template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: TemplateId,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub maintenance_type: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub estimated_minutes: f64,
}

/// An equipment roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// A sector roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// A maintenance technician roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintainer {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Daily capacity in minutes.
    #[serde(default)]
    pub daily_capacity_minutes: f64,
    /// Assignment priority order (lower is assigned first).
    #[serde(default)]
    pub priority_order: i32,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_resolution() {
        assert!(StoppageStatus::Done.is_resolved());
        assert!(!StoppageStatus::Pending.is_resolved());
        assert!(!StoppageStatus::InProgress.is_resolved());
        assert!(!StoppageStatus::Cancelled.is_resolved());
    }

    #[test]
    fn test_priority_default_is_low() {
        assert_eq!(TaskPriority::default(), TaskPriority::Low);
    }

    #[test]
    fn test_unknown_priority_coerces_to_low() {
        let template: TaskTemplate =
            serde_json::from_str(r#"{"id": "tpl-1", "priority": "urgent"}"#).unwrap();
        assert_eq!(template.priority, Some(TaskPriority::Low));
    }

    #[test]
    fn test_origin_active_labels() {
        let origin = OriginFlags {
            electrical: true,
            automation: true,
            ..OriginFlags::default()
        };
        assert_eq!(origin.active_labels(), vec!["electrical", "automation"]);
        assert!(OriginFlags::default().active_labels().is_empty());
    }

    #[test]
    fn test_stoppage_deserializes_with_missing_optionals() {
        let json = r#"{"id": "stp-1", "status": "pending"}"#;
        let event: StoppageEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.sector, None);
        assert_eq!(event.duration_minutes, None);
        assert_eq!(event.created_at, TimestampLike::Missing);
        assert_eq!(event.origin, OriginFlags::default());
    }

    #[test]
    fn test_template_defaults() {
        let json = r#"{"id": "tpl-1"}"#;
        let template: TaskTemplate = serde_json::from_str(json).unwrap();
        assert!(template.active);
        assert_eq!(template.priority, None);
        assert_eq!(template.estimated_minutes, 0.0);
    }
}
