//! Dimensional grouping and top-N ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback grouping key for records with no value in the source field.
pub const OTHER_KEY: &str = "Other";

/// A single `{name, value}` aggregate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    pub value: f64,
}

/// Coerce an optional categorical value to a usable grouping key.
///
/// Absent or blank values become `fallback`, so grouping never drops a
/// record silently.
pub fn key_or_default(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

/// Group records by a categorical key, summing a numeric measure per group.
///
/// Groups are sorted by value descending; ties keep first-seen insertion
/// order (the sort is stable and no secondary key is applied).
pub fn group_sum<T>(
    records: &[&T],
    key: impl Fn(&T) -> String,
    measure: impl Fn(&T) -> f64,
) -> Vec<GroupEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupEntry> = Vec::new();

    for &record in records {
        let name = key(record);
        match index.get(&name) {
            Some(&slot) => groups[slot].value += measure(record),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(GroupEntry {
                    name,
                    value: measure(record),
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    groups
}

/// Group records by a categorical key, counting one per record.
pub fn group_count<T>(records: &[&T], key: impl Fn(&T) -> String) -> Vec<GroupEntry> {
    group_sum(records, key, |_| 1.0)
}

/// Truncate a ranked group list to its first `n` entries.
pub fn top_n(mut groups: Vec<GroupEntry>, n: usize) -> Vec<GroupEntry> {
    groups.truncate(n);
    groups
}
