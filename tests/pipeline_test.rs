//! End-to-end pipeline tests over the public library API.

use chrono::NaiveDate;
use tandem::error::Error;
use tandem::pairs::{self, report, PairKey};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn overlapping_pair_in_one_project() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,2023-01-01,2023-01-10\n\
               2,100,2023-01-05,2023-01-15\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert_eq!(report.totals[&PairKey::new(1, 2)], 6);

    let rows = report::detailed_max_only(&report);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].project_id, Some(100));
    assert_eq!(rows[0].days_worked, 6);
}

#[test]
fn same_pair_accumulates_across_projects() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,101,2023-01-05,2023-01-10\n\
               2,101,2023-01-01,2023-01-15\n\
               1,102,2023-03-01,2023-03-05\n\
               2,102,2023-03-01,2023-03-10\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();

    let aggregated = report::aggregated_all(&report);
    assert_eq!(aggregated.len(), 1);
    assert_eq!(aggregated[0].days_worked, 11);
    assert_eq!(aggregated[0].project_id, None);

    let detailed = report::detailed_max_only(&report);
    assert_eq!(detailed.len(), 2);
    assert_eq!(detailed[0].project_id, Some(101));
    assert_eq!(detailed[0].days_worked, 6);
    assert_eq!(detailed[1].project_id, Some(102));
    assert_eq!(detailed[1].days_worked, 5);
}

#[test]
fn open_ended_assignments_run_until_today() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,2024-05-01,\n\
               2,100,2024-05-01,NULL\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    // May 1 through June 1 inclusive.
    assert_eq!(report.totals[&PairKey::new(1, 2)], 32);
}

#[test]
fn unresolvable_start_dates_drop_the_row() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,,2023-01-10\n\
               2,100,NULL,2023-01-10\n\
               3,100,garbage,2023-01-10\n\
               4,100,2023-01-01,2023-01-10\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert_eq!(report.skipped_rows, 3);
    // Only employee 4 survives, so nobody pairs up.
    assert!(report.totals.is_empty());
}

#[test]
fn disjoint_ranges_emit_nothing() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,200,2023-01-01,2023-01-10\n\
               2,200,2023-02-01,2023-02-10\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert!(report.details.is_empty());
    assert!(report::detailed_max_only(&report).is_empty());
}

#[test]
fn malformed_id_skips_only_that_row() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,2023-01-01,2023-01-10\n\
               x,100,2023-01-01,2023-01-10\n\
               2,100,2023-01-01,2023-01-10\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.totals[&PairKey::new(1, 2)], 10);
    assert_eq!(report.totals.len(), 1);
}

#[test]
fn header_only_input_is_empty_success() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n";
    let results = pairs::most_collaborative(csv.as_bytes(), today()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn missing_column_is_a_failure_not_an_empty_result() {
    let csv = "EmpID,ProjectID,DateFrom\n1,100,2023-01-01\n";
    let err = pairs::most_collaborative(csv.as_bytes(), today()).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn mixed_date_formats_resolve_consistently() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,2023-01-01,01/10/2023\n\
               2,100,05-01-2023,2023-01-15\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    // 05-01-2023 parses day-first as Jan 5; overlap is Jan 5-10.
    assert_eq!(report.totals[&PairKey::new(1, 2)], 6);
}

#[test]
fn employee_order_in_input_does_not_change_the_key() {
    let forward = "EmpID,ProjectID,DateFrom,DateTo\n\
                   3,200,2023-01-01,2023-01-10\n\
                   5,200,2023-01-01,2023-01-10\n";
    let reversed = "EmpID,ProjectID,DateFrom,DateTo\n\
                    5,200,2023-01-01,2023-01-10\n\
                    3,200,2023-01-01,2023-01-10\n";
    let a = pairs::most_collaborative(forward.as_bytes(), today()).unwrap();
    let b = pairs::most_collaborative(reversed.as_bytes(), today()).unwrap();
    assert_eq!(a, b);
    assert_eq!((a[0].emp_id_1, a[0].emp_id_2), (3, 5));
}

#[test]
fn rerunning_the_pipeline_is_deterministic() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,101,2023-01-01,2023-01-10\n\
               2,101,2023-01-01,2023-01-10\n\
               3,101,2023-01-03,2023-01-07\n\
               1,102,2023-02-01,2023-02-05\n\
               3,102,2023-02-01,2023-02-05\n";
    let first = pairs::most_collaborative(csv.as_bytes(), today()).unwrap();
    let second = pairs::most_collaborative(csv.as_bytes(), today()).unwrap();
    assert_eq!(first, second);

    let report_a = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    let report_b = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert_eq!(
        report::aggregated_all(&report_a),
        report::aggregated_all(&report_b)
    );
    assert_eq!(report_a.details, report_b.details);
}

#[test]
fn emitted_rows_always_have_positive_days() {
    let csv = "EmpID,ProjectID,DateFrom,DateTo\n\
               1,100,2023-01-01,2023-01-10\n\
               2,100,2023-01-10,2023-01-20\n\
               3,100,2023-01-20,2023-01-25\n\
               4,100,2023-03-01,2023-03-05\n";
    let report = pairs::process_csv(csv.as_bytes(), today()).unwrap();
    assert!(report
        .details
        .iter()
        .all(|detail| detail.days_worked >= 1));
    assert!(report.totals.values().all(|days| *days >= 1));
}
