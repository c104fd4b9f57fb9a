//! End-to-end tests for the sizetree binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = r#"{"name": "root", "size": 1, "children": [
    {"name": "a", "size": 2},
    {"name": "b", "children": [{"name": "c", "size": 5}]}
]}"#;

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("tree.json");
    fs::write(&path, SAMPLE).unwrap();
    path
}

fn sizetree() -> Command {
    Command::cargo_bin("sizetree").unwrap()
}

#[test]
fn test_total_text() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .arg("total")
        .arg(&path)
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_total_from_stdin() {
    sizetree()
        .arg("total")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_folders_json_by_size() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let output = sizetree()
        .args(["folders", "--sort", "size-desc", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let folders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(folders["root"], 8);
    assert_eq!(folders["b"], 5);
    assert!(folders.get("a").is_none());
}

#[test]
fn test_levels_text() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .arg("levels")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0: root"))
        .stdout(predicate::str::contains("1: a, b"))
        .stdout(predicate::str::contains("2: c"));
}

#[test]
fn test_levels_truncated() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .args(["levels", "--max-levels", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0: root"))
        .stdout(predicate::str::contains("... and 2 more levels"));
}

#[test]
fn test_default_report() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("root - 8"))
        .stdout(predicate::str::contains("4 nodes (2 files, 2 folders), 3 levels"));
}

#[test]
fn test_missing_file_fails() {
    sizetree()
        .args(["total", "/no/such/tree.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_zero_max_levels_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .args(["levels", "--max-levels", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid report options"));
}

#[test]
fn test_report_json_honours_levels_and_sort() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let output = sizetree()
        .args(["report", "--max-levels", "1", "--sort", "size-desc", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["levels"], serde_json::json!([["root"]]));
    assert_eq!(report["depth"], 3);

    // Key order in the raw text follows the requested sort.
    let text = String::from_utf8(output.stdout).unwrap();
    let root_at = text.find(r#""root": 8"#).unwrap();
    let b_at = text.find(r#""b": 5"#).unwrap();
    assert!(root_at < b_at);
}

#[test]
fn test_subcommand_uses_top_level_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    sizetree()
        .arg(&path)
        .arg("total")
        .assert()
        .success()
        .stdout("8\n");
}
