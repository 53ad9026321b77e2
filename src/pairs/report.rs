//! Shaping of the aggregated pair data into caller-facing rows.
//!
//! Two projections exist over the same [`PairReport`]: every pair with its
//! cross-project total, or only the most collaborative pair broken down per
//! project. The service wires the latter; see DESIGN.md.

use tracing::info;

use super::types::{PairKey, PairReport, PairResult};

/// One row per pair with any positive aggregated total, `project_id`
/// omitted, sorted by canonical pair ascending for reproducible output.
pub fn aggregated_all(report: &PairReport) -> Vec<PairResult> {
    let mut rows: Vec<PairResult> = report
        .totals
        .iter()
        .map(|(pair, days)| PairResult {
            emp_id_1: pair.emp_id_1,
            emp_id_2: pair.emp_id_2,
            project_id: None,
            days_worked: *days,
        })
        .collect();
    rows.sort_by_key(|r| (r.emp_id_1, r.emp_id_2));
    rows
}

/// Per-project rows of the single pair with the largest cross-project
/// total. Ties on the total go to the smallest canonical pair.
pub fn detailed_max_only(report: &PairReport) -> Vec<PairResult> {
    let Some((top_pair, total_days)) = most_collaborative_pair(report) else {
        info!("No overlapping employee pairs found");
        return Vec::new();
    };

    info!(
        "Most collaborative pair: {} and {} with total {} days",
        top_pair.emp_id_1, top_pair.emp_id_2, total_days
    );

    report
        .details
        .iter()
        .filter(|detail| detail.pair == top_pair)
        .map(|detail| PairResult {
            emp_id_1: detail.pair.emp_id_1,
            emp_id_2: detail.pair.emp_id_2,
            project_id: Some(detail.project_id),
            days_worked: detail.days_worked,
        })
        .collect()
}

fn most_collaborative_pair(report: &PairReport) -> Option<(PairKey, i64)> {
    report
        .totals
        .iter()
        .map(|(pair, days)| (*pair, *days))
        // Largest total wins; on equal totals the smaller pair compares
        // greater here, making the selection deterministic.
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}
