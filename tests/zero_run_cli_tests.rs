//! End-to-end CLI tests over temporary CSV files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Six readings, target columns b and c (second through fifth data column,
/// capped by the available columns)
const SAMPLE_CSV: &str = "time,a,b,c\n\
    08:00,9,1,1\n\
    08:05,9,0,0\n\
    08:10,9,0,0\n\
    08:15,9,1,0\n\
    08:20,9,0,0\n\
    08:25,9,0,0\n";

fn write_sample(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_markdown_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "# Zero-Value Interval Analysis Report",
        ))
        .stdout(predicate::str::contains("- Zero-value rows: 4"))
        .stdout(predicate::str::contains("- Zero-value intervals: 2"))
        .stdout(predicate::str::contains("- Time range: 08:05 - 08:10"))
        .stdout(predicate::str::contains("- Time range: 08:20 - 08:25"))
        .stdout(predicate::str::contains("- Average duration: 2.00 data points"));
}

#[test]
fn test_text_format() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("--format").arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zero rows: 4  intervals: 2"))
        .stdout(predicate::str::contains("08:05 - 08:10"));
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["summary"]["interval_count"], 2);
    assert_eq!(value["summary"]["total_zero_rows"], 4);
    assert_eq!(value["intervals"][0]["start_label"], "08:05");
    assert_eq!(value["target_columns"][0]["name"], "b");
}

#[test]
fn test_report_written_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);
    let report_path = dir.path().join("report.md");

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("-o").arg(&report_path);

    cmd.assert().success();
    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("## Interval Details"));
    assert!(report.contains("### Interval 2"));
}

#[test]
fn test_no_intervals_notice() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", "time,a,b\n08:00,1,2\n08:05,3,4\n");

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## No Zero-Value Intervals Found"));
}

#[test]
fn test_window_size_flag() {
    let dir = TempDir::new().unwrap();
    // With -w 1 only column b is targeted; row 3 (b=1, c=0) stays nonzero
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("-w").arg("1").arg("--format").arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("target columns: b (col 3)"));
}

#[test]
fn test_missing_input_fails() {
    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg("no_such_file.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.csv"));
}

#[test]
fn test_missing_configured_time_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", SAMPLE_CSV);

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("-t").arg("recorded_at");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("recorded_at"));
}

#[test]
fn test_non_numeric_target_cell_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(
        &dir,
        "readings.csv",
        "time,a,b\n08:00,1,offline\n",
    );

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("row 0"))
        .stderr(predicate::str::contains("offline"));
}

#[test]
fn test_failed_run_writes_no_report() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", "time,a,b\n08:00,1,offline\n");
    let report_path = dir.path().join("report.md");

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("-o").arg(&report_path);

    cmd.assert().failure();
    assert!(!report_path.exists());
}

#[test]
fn test_gbk_encoded_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readings.csv");
    // Header "时间" (time) in GBK plus two data columns
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0xCA, 0xB1, 0xBC, 0xE4]);
    bytes.extend_from_slice(b",a,b\nx,9,0\ny,9,0\n");
    fs::write(&path, bytes).unwrap();

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&path)
        .arg("-t")
        .arg("时间")
        .arg("--format")
        .arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zero rows: 2  intervals: 1"));
}

#[test]
fn test_semicolon_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "readings.csv", "time;a;b\n08:00;9;0\n");

    let mut cmd = Command::cargo_bin("zerospan").unwrap();
    cmd.arg(&input).arg("-d").arg(";").arg("--format").arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zero rows: 1  intervals: 1"));
}
