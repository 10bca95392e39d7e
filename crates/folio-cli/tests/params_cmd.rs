//! Integration tests for the `params` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("folio").unwrap()
}

fn write_temp_json(contents: &str) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn params_show_prints_defaults() {
    cmd()
        .args(["params", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"column_width_ratio\": 0.08"))
        .stdout(predicate::str::contains("\"min_column_gap\": 60"))
        .stdout(predicate::str::contains("\"fallback_reading_order\": 999999"))
        .stdout(predicate::str::contains("\"default_page_edge\": 1000.0"));
}

#[test]
fn params_validate_accepts_partial_override() {
    let tmp = write_temp_json(r#"{ "min_column_gap": 30 }"#);

    cmd()
        .args(["params", "validate", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("min_column_gap: 30"));
}

#[test]
fn params_validate_rejects_zero_ratio() {
    let tmp = write_temp_json(r#"{ "column_width_ratio": 0.0 }"#);

    cmd()
        .args(["params", "validate", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column_width_ratio"));
}

#[test]
fn params_validate_rejects_unparseable_file() {
    let tmp = write_temp_json("{ not json");

    cmd()
        .args(["params", "validate", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load layout params"));
}

#[test]
fn params_validate_missing_file_fails() {
    cmd()
        .args(["params", "validate", "/nonexistent/params.json"])
        .assert()
        .failure();
}
