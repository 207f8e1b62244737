#![allow(clippy::unwrap_used)] // Tests can use unwrap() for simplicity
//! CLI Integration Tests
//!
//! Test Approach: CLI integration tests with assert_cmd
//! Covers the non-interactive table, columns and summary commands; the
//! interactive viewer needs a terminal and is tested through its key handler.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const APPS: &str = r#"[
    {"$type": "App", "$display": ["Name", "Config"], "Name": "api", "Owner": "team-a",
     "Config": {"$type": "Config", "Port": 443, "Tags": ["edge", "tls"]}},
    {"$type": "App", "$display": ["Name", "Config"], "Name": "web", "Owner": "team-b",
     "Config": null}
]"#;

/// Helper function to create drillgrid command
fn drillgrid() -> Command {
    let mut cmd = Command::cargo_bin("drillgrid").expect("Failed to find drillgrid binary");
    cmd.env_remove("DRILLGRID_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════════
// table
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_table_prints_grid_and_status() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--no-title-suffix"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Config"))
        .stdout(predicate::str::contains("<Config>"))
        .stdout(predicate::str::contains("Total Items: 2"))
        // Owner is not in the display set
        .stdout(predicate::str::contains("Owner").not());
}

#[test]
fn test_table_full_mode_shows_every_property() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--mode", "full"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner"))
        .stdout(predicate::str::contains("team-b"));
}

#[test]
fn test_table_filter_sets_status() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--no-title-suffix", "--filter", "TEAM-B"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("web"))
        .stdout(predicate::str::contains("api").not())
        .stdout(predicate::str::contains("Showing 1 of 2"));
}

#[test]
fn test_table_drill_into_nested_record() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--drill", "0:Config"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("> Config"))
        .stdout(predicate::str::contains("Port"))
        .stdout(predicate::str::contains("443"))
        .stdout(predicate::str::contains("[2 items]"));
}

#[test]
fn test_table_drill_twice_into_scalar_list() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--drill", "0:Config", "--drill", "0:Tags"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Index"))
        .stdout(predicate::str::contains("Value"))
        .stdout(predicate::str::contains("edge"))
        .stdout(predicate::str::contains("tls"));
}

#[test]
fn test_table_drill_into_null_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--drill", "1:Config"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a drill-down cell"));
}

#[test]
fn test_table_limit_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--no-title-suffix", "-n", "1"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("web").not());
}

#[test]
fn test_table_reads_stdin() {
    drillgrid()
        .args(["table", "-"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index"))
        .stdout(predicate::str::contains("Total Items: 3"));
}

#[test]
fn test_table_reads_json_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "events.jsonl",
        "{\"Kind\": \"start\"}\n{\"Kind\": \"stop\"}\n",
    );

    drillgrid()
        .arg("table")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("Total Items: 2"));
}

#[test]
fn test_table_reads_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "hosts.yaml", "- Name: db01\n  Cores: 8\n- Name: db02\n  Cores: 16\n");

    drillgrid()
        .arg("table")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("db02"))
        .stdout(predicate::str::contains("16"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors and edge cases
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_theme_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["table", "--theme", "Sepia"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme"));
}

#[test]
fn test_empty_input_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "empty.json", "[]");

    drillgrid()
        .arg("table")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to display"));
}

#[test]
fn test_missing_file_fails() {
    drillgrid()
        .args(["table", "/nonexistent/drillgrid/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_config_file_sets_title() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);
    let config = write_file(&dir, "view.yaml", "title: Fleet\nremove_title_suffix: true\n");

    drillgrid()
        .arg("columns")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Columns for Fleet (Default mode):"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// columns and summary
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_columns_lists_kinds() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["columns", "--title", "Apps", "--no-title-suffix"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns for Apps"))
        .stdout(predicate::str::is_match(r"Name\s+Text").unwrap())
        .stdout(predicate::str::is_match(r"Config\s+DrillDown").unwrap());
}

#[test]
fn test_summary_counts_types() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "mixed.json",
        r#"[{"$type": "Server"}, {"$type": "Server"}, {"$type": "Service"}, "loose"]"#,
    );

    drillgrid()
        .arg("summary")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Server\s+2\s+50\.0%").unwrap())
        .stdout(predicate::str::is_match(r"Service\s+1\s+25\.0%").unwrap())
        .stdout(predicate::str::contains("Total: 4"));
}

#[test]
fn test_summary_ignores_filter() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "apps.json", APPS);

    drillgrid()
        .args(["summary", "--filter", "api"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"));
}
