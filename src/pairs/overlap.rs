//! Pairwise interval overlap within a project and cross-project
//! aggregation.

use std::collections::HashMap;

use tracing::debug;

use super::types::{Assignment, OverlapDetail, PairKey};

/// Inclusive day count shared by two assignment windows, if they intersect.
/// A single common day counts as 1.
fn shared_days(a: &Assignment, b: &Assignment) -> Option<i64> {
    let overlap_start = a.date_from.max(b.date_from);
    let overlap_end = a.date_to.min(b.date_to);
    if overlap_start > overlap_end {
        return None;
    }
    Some((overlap_end - overlap_start).num_days() + 1)
}

/// Compare every i<j pairing inside one project's participant list and push
/// an [`OverlapDetail`] for each intersecting pair.
///
/// Repeated assignments are independent participants, each entering its own
/// comparisons; two entries for the same employee never form a pair with
/// each other.
pub fn project_overlaps(
    project_id: i64,
    participants: &[Assignment],
    out: &mut Vec<OverlapDetail>,
) {
    for i in 0..participants.len() {
        for j in i + 1..participants.len() {
            let a = &participants[i];
            let b = &participants[j];
            if a.employee_id == b.employee_id {
                continue;
            }
            if let Some(days_worked) = shared_days(a, b) {
                let pair = PairKey::new(a.employee_id, b.employee_id);
                debug!(
                    "Employees {} and {} worked on project {} for {} days",
                    pair.emp_id_1, pair.emp_id_2, project_id, days_worked
                );
                out.push(OverlapDetail {
                    pair,
                    project_id,
                    days_worked,
                });
            }
        }
    }
}

/// Sum per-project day counts into cross-project totals per pair. Pure
/// reduction over already-computed overlaps.
pub fn aggregate(details: &[OverlapDetail]) -> HashMap<PairKey, i64> {
    let mut totals = HashMap::new();
    for detail in details {
        *totals.entry(detail.pair).or_insert(0) += detail.days_worked;
    }
    totals
}
