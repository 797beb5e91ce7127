//! Integration tests for tally-report

use chrono::NaiveDate;
use std::fs;
use std::time::Duration;
use tally_core::Summary;
use tally_report::results::STATISTICS_RESULTS;
use tally_report::{statistics_report, ResultsFile};
use tempfile::TempDir;

#[test]
fn test_reports_are_appended() {
    let dir = TempDir::new().unwrap();
    let results = ResultsFile::in_dir(dir.path().join("nested"), STATISTICS_RESULTS);
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let summary = Summary::compute(&[1.0, 2.0, 3.0]).unwrap();
    let text = statistics_report(at, "data.txt", &summary).render(Duration::from_secs(1));

    results.append(&text).unwrap();
    results.append(&text).unwrap();

    let written = fs::read_to_string(results.path()).unwrap();
    assert_eq!(written, format!("{text}{text}"));
    assert_eq!(written.matches("Execution: 2026-10-19 12:00:00").count(), 2);
    assert!(written.contains("Median: 2.0\n"));
    assert!(written.contains("Standard Deviation: 1.0\n"));
    assert!(written.contains("Elapsed Time: 1.0 seconds\n"));
}

#[test]
fn test_append_into_missing_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let results = ResultsFile::in_dir(&blocker, STATISTICS_RESULTS);
    assert!(results.append("x").is_err());
}
