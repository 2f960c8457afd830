//! Smoke tests for the flopcount CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the flopcount binary
fn flopcount() -> Command {
    Command::cargo_bin("flopcount").expect("flopcount binary should exist")
}

const TRACE: &str = r"sites:
  - library: /home/user/app
    directory: /home/user/src
    file: main.c
    function: compute
    ops: [AddF64]
    executions: 3
  - library: /usr/lib/libinterflop_mca.so
    directory: /build/mca
    file: interflop_mca.c
    function: _interflop_add_double
    entry: true
    ops: [AddF64]
";

fn write_trace(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    flopcount()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.4.0"));
}

#[test]
fn test_help_flag() {
    flopcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("opcode"));
}

#[test]
fn test_no_args_fails() {
    flopcount().assert().failure();
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn test_replay_text_report() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "run.yaml", TRACE);

    flopcount()
        .arg("replay")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 IEEE functions visited\n"))
        .stdout(predicate::str::contains(
            "\t* /home/user/app -> /home/user/src/main.c:compute : 3\n",
        ))
        .stdout(predicate::str::contains("Interflop FP: 1\n"))
        .stdout(predicate::str::ends_with(
            "IEEE FP ratio: 75%\nInterflop FP ratio: 25%\n",
        ));
}

#[test]
fn test_replay_json_report() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "run.yaml", TRACE);

    let output = flopcount()
        .args(["replay", "--format", "json"])
        .arg(&trace)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ieee"]["total"], 3);
    assert_eq!(json["interflop"]["total"], 1);
    assert_eq!(json["ratios"]["ieee"], 75);
}

#[test]
fn test_replay_empty_trace() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "empty.json", r#"{"sites": []}"#);

    flopcount()
        .arg("replay")
        .arg(&trace)
        .assert()
        .success()
        .stdout("No functions visited\n");
}

#[test]
fn test_replay_with_config() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "run.yaml", TRACE);
    let config = write_trace(
        &dir,
        "flopcount.yaml",
        "rules:\n  ignored_functions:\n    - compute\n",
    );

    flopcount()
        .arg("replay")
        .arg(&trace)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 IEEE functions visited"))
        .stdout(predicate::str::contains("Interflop FP ratio: 100%"));
}

#[test]
fn test_replay_missing_file() {
    flopcount()
        .args(["replay", "/nonexistent/run.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_replay_bad_config_field() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "run.yaml", TRACE);
    let config = write_trace(&dir, "bad.yaml", "capacity: 3\n");

    flopcount()
        .arg("replay")
        .arg(&trace)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}

// ============================================================================
// Inspection commands
// ============================================================================

#[test]
fn test_classify_interflop() {
    flopcount()
        .args([
            "classify",
            "--function",
            "_interflop_add_float",
            "--library",
            "/usr/lib/libinterflop_mca.so",
        ])
        .assert()
        .success()
        .stdout("interflop\n");
}

#[test]
fn test_classify_without_function_fails() {
    flopcount()
        .args(["classify", "--library", "/home/user/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--function"));
}

#[test]
fn test_classify_libc_is_ignored() {
    flopcount()
        .args(["classify", "--function", "foo", "--library", "/usr/lib/libc-2.31.so"])
        .assert()
        .success()
        .stdout("ignore\n");
}

#[test]
fn test_opcode_description() {
    flopcount()
        .args(["opcode", "SqrtF64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category: Intrinsic"))
        .stdout(predicate::str::contains("countable: no"));
}

#[test]
fn test_unknown_opcode_fails() {
    flopcount()
        .args(["opcode", "Add8x16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown opcode: Add8x16"));
}

#[test]
fn test_rules_listing() {
    flopcount()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("interflop_included_libraries (1):"))
        .stdout(predicate::str::contains("*/libinterflop_*"));
}
