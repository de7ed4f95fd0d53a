// Integration tests for the summary-analyzer CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the summary-analyzer binary.
fn analyzer() -> Command {
    Command::cargo_bin("summary-analyzer").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    analyzer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary-analyzer"));
}

#[test]
fn cli_help_flag() {
    analyzer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LLM-generated text summaries"));
}

#[test]
fn analyze_requires_path() {
    analyzer()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_requires_model_name() {
    analyzer()
        .args(["score", "summary.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--model"));
}

#[test]
fn analyze_rejects_output_with_no_write() {
    analyzer()
        .args(["analyze", ".", "--output", "r.md", "--no-write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    analyzer()
        .args(["-q", "-v", "stats", "report.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn analyze_missing_path_exits_with_runtime_failure() {
    analyzer()
        .args(["analyze", "/definitely/not/here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
