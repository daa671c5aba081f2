//! Sort engine.

use std::cmp::Ordering;

use algebra_model::{SortOrder, SortState, StructureRecord};

/// Return a sorted copy of `records`.
///
/// Values are compared as plain strings, so `"10"` sorts before `"2"` and
/// `"∞"` after every ASCII digit. The sort is stable in both directions:
/// records with equal values keep their input order. Without a sort state the
/// input order is returned unchanged.
pub fn sort_records(records: &[StructureRecord], sort: Option<SortState>) -> Vec<StructureRecord> {
    let mut sorted = records.to_vec();
    if let Some(state) = sort {
        sorted.sort_by(|a, b| compare(a, b, state));
    }
    sorted
}

fn compare(a: &StructureRecord, b: &StructureRecord, state: SortState) -> Ordering {
    let ordering = a.value(state.column).cmp(b.value(state.column));
    match state.order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}
