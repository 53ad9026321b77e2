//! CSV record parsing and row validation.
//!
//! Columns are looked up by declared header name, never by position. Rows
//! with malformed or partial fields are skipped with a diagnostic; only
//! structural problems (missing header columns, undecodable bytes) abort
//! the whole parse.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::dates;
use super::types::{Assignment, ProjectGroups};

pub const EMPLOYEE_ID_COLUMN: &str = "EmpID";
pub const PROJECT_ID_COLUMN: &str = "ProjectID";
pub const DATE_FROM_COLUMN: &str = "DateFrom";
pub const DATE_TO_COLUMN: &str = "DateTo";

/// Field offsets resolved from the header row once, reused for every record.
struct ColumnIndex {
    employee_id: usize,
    project_id: usize,
    date_from: usize,
    date_to: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::MalformedInput(format!("missing required column '{name}'")))
        };
        Ok(Self {
            employee_id: position(EMPLOYEE_ID_COLUMN)?,
            project_id: position(PROJECT_ID_COLUMN)?,
            date_from: position(DATE_FROM_COLUMN)?,
            date_to: position(DATE_TO_COLUMN)?,
        })
    }
}

#[derive(Debug)]
pub struct ParsedAssignments {
    pub groups: ProjectGroups,
    pub skipped_rows: usize,
}

/// Read the whole stream into per-project assignment groups.
pub fn read_assignments(input: impl Read, today: NaiveDate) -> Result<ParsedAssignments> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| Error::MalformedInput(format!("unreadable header row: {e}")))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut groups: ProjectGroups = HashMap::new();
    let mut skipped_rows = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::MalformedInput(format!("unreadable record: {e}")))?;
        match parse_record(&record, &columns, today) {
            Ok(assignment) => groups
                .entry(assignment.project_id)
                .or_default()
                .push(assignment),
            Err(reason) => {
                // +2: one for the header row, one for 1-based numbering.
                warn!("Skipping row {}: {}", index + 2, reason);
                skipped_rows += 1;
            }
        }
    }

    debug!(
        "Parsed assignments for {} projects, skipped {} rows",
        groups.len(),
        skipped_rows
    );
    Ok(ParsedAssignments {
        groups,
        skipped_rows,
    })
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnIndex,
    today: NaiveDate,
) -> std::result::Result<Assignment, String> {
    let raw_employee = record
        .get(columns.employee_id)
        .ok_or("missing employee id field")?;
    let employee_id: i64 = raw_employee
        .trim()
        .parse()
        .map_err(|_| format!("invalid employee id '{raw_employee}'"))?;

    let raw_project = record
        .get(columns.project_id)
        .ok_or("missing project id field")?;
    let project_id: i64 = raw_project
        .trim()
        .parse()
        .map_err(|_| format!("invalid project id '{raw_project}'"))?;

    let raw_from = record
        .get(columns.date_from)
        .ok_or("missing start date field")?;
    let date_from = dates::resolve_start(raw_from)
        .ok_or_else(|| format!("unresolvable start date '{raw_from}'"))?;

    let raw_to = record.get(columns.date_to).ok_or("missing end date field")?;
    let date_to = dates::resolve_end(raw_to, today)
        .ok_or_else(|| format!("unresolvable end date '{raw_to}'"))?;

    Ok(Assignment {
        employee_id,
        project_id,
        date_from,
        date_to,
    })
}
