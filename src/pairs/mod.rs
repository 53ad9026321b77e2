//! Employee pair collaboration pipeline.
//!
//! A single forward pass over a CSV stream: parse and validate rows,
//! resolve tolerant date formats, bucket assignments by project, intersect
//! participant windows pairwise, and sum shared days per employee pair
//! across projects. Every structure is built fresh per invocation and
//! dropped on return; nothing is cached between calls.

pub mod dates;
pub mod overlap;
pub mod parser;
pub mod report;
pub mod types;

use std::io::Read;

use chrono::NaiveDate;

use crate::error::Result;

pub use types::{Assignment, OverlapDetail, PairKey, PairReport, PairResult};

/// Run the full pipeline and return the policy-agnostic report.
///
/// `today` resolves open-ended assignments (blank or `NULL` end dates) so
/// one invocation sees a single consistent date.
pub fn process_csv(input: impl Read, today: NaiveDate) -> Result<PairReport> {
    let parsed = parser::read_assignments(input, today)?;

    // Project order does not affect totals; iterate sorted so the detail
    // rows come out the same on every run.
    let mut project_ids: Vec<i64> = parsed.groups.keys().copied().collect();
    project_ids.sort_unstable();

    let mut details = Vec::new();
    for project_id in project_ids {
        overlap::project_overlaps(project_id, &parsed.groups[&project_id], &mut details);
    }

    let totals = overlap::aggregate(&details);
    Ok(PairReport {
        details,
        totals,
        skipped_rows: parsed.skipped_rows,
    })
}

/// The service's product policy: the per-project rows of the single most
/// collaborative pair.
pub fn most_collaborative(input: impl Read, today: NaiveDate) -> Result<Vec<PairResult>> {
    let report = process_csv(input, today)?;
    Ok(report::detailed_max_only(&report))
}
