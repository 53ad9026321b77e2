use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// One validated row: an employee's participation window on a project.
///
/// `date_from` always parsed successfully; `date_to` is the resolved end
/// date, defaulted to today for open-ended assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub employee_id: i64,
    pub project_id: i64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Assignments bucketed by project identifier.
pub type ProjectGroups = HashMap<i64, Vec<Assignment>>;

/// Canonical unordered pair of two distinct employee ids, smaller id first,
/// so `(a, b)` and `(b, a)` hash and compare identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub emp_id_1: i64,
    pub emp_id_2: i64,
}

impl PairKey {
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self {
                emp_id_1: a,
                emp_id_2: b,
            }
        } else {
            Self {
                emp_id_1: b,
                emp_id_2: a,
            }
        }
    }
}

/// A single per-project overlap: one pair shared `days_worked` calendar
/// days on `project_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapDetail {
    pub pair: PairKey,
    pub project_id: i64,
    pub days_worked: i64,
}

/// Output row serialized for the caller.
///
/// `project_id` is populated by the detailed shaping only; the aggregated
/// shaping omits the field entirely from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResult {
    pub emp_id_1: i64,
    pub emp_id_2: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub days_worked: i64,
}

/// Policy-agnostic pipeline output.
///
/// `details` holds every per-project overlap in project-then-discovery
/// order; `totals` the cross-project day sums per pair. Shaping into the
/// caller-facing list happens in [`super::report`].
#[derive(Debug, Clone, Default)]
pub struct PairReport {
    pub details: Vec<OverlapDetail>,
    pub totals: HashMap<PairKey, i64>,
    pub skipped_rows: usize,
}
