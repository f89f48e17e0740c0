//! Temporal filtering of record collections.

use crate::models::period::PeriodRange;
use crate::models::time::TimestampLike;

/// Select the records whose timestamp falls inside `range`.
///
/// The accessor extracts the raw timestamp-like value from each record;
/// records whose value does not normalize to an instant are excluded.
/// Original relative order is preserved and the input is never mutated.
pub fn filter_by_period<'a, T>(
    records: &'a [T],
    range: &PeriodRange,
    accessor: impl Fn(&T) -> &TimestampLike,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| {
            accessor(record)
                .to_instant()
                .map(|t| range.contains(t))
                .unwrap_or(false)
        })
        .collect()
}
