//! Integration tests for plan-summary
//!
//! These tests run the built binary end-to-end against the fixture plans.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the plan-summary binary
fn plan_summary_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_plan-summary"))
}

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Build a command isolated from any Actions environment of the host
fn plan_summary() -> Command {
    let mut command = Command::new(plan_summary_binary());
    command
        .env_remove("INPUT_PLAN-FILE-PATH")
        .env_remove("GITHUB_STEP_SUMMARY")
        .env_remove("GITHUB_OUTPUT");
    command
}

/// Run plan-summary with args and return output
fn run_plan_summary(args: &[&str]) -> std::process::Output {
    plan_summary()
        .args(args)
        .output()
        .expect("Failed to execute plan-summary")
}

#[test]
fn test_version() {
    let output = run_plan_summary(&["--version"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plan-summary"));
}

#[test]
fn test_help() {
    let output = run_plan_summary(&["--help"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("PLAN_FILE"));
}

#[test]
fn test_no_changes_plan() {
    let output = run_plan_summary(&[&fixture("sample-plan.json")]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No changes. Infrastructure is up-to-date."));
    assert!(stdout.contains("Plan: 0 to add, 0 to change, 0 to destroy."));
}

#[test]
fn test_plan_with_changes() {
    let output = run_plan_summary(&[&fixture("plan-with-changes.json")]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Resources to be created:"));
    assert!(stdout.contains("+ aws_s3_bucket.example (create)"));
    assert!(stdout.contains("1 to add"));
}

#[test]
fn test_plan_with_updates() {
    let output = run_plan_summary(&[&fixture("plan-with-updates.json")]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("~ aws_s3_bucket.updated (update)"));
    assert!(stdout.contains("1 to change"));
}

#[test]
fn test_plan_with_deletions() {
    let output = run_plan_summary(&[&fixture("plan-with-deletions.json")]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- aws_s3_bucket.deleted (delete)"));
    assert!(stdout.contains("1 to destroy"));
}

#[test]
fn test_mixed_plan_sections() {
    let output = run_plan_summary(&[&fixture("plan-with-mixed-changes.json")]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Plan: 1 to add, 1 to change, 1 to destroy."));

    let created = stdout.find("Resources to be created:").unwrap();
    let updated = stdout.find("Resources to be updated:").unwrap();
    let destroyed = stdout.find("Resources to be destroyed:").unwrap();
    assert!(created < stdout.find("aws_s3_bucket.new").unwrap());
    assert!(updated < stdout.find("aws_s3_bucket.updated").unwrap());
    assert!(destroyed < stdout.find("aws_s3_bucket.deleted").unwrap());
    assert!(created < updated && updated < destroyed);
}

#[test]
fn test_input_from_actions_environment() {
    let output = plan_summary()
        .env("INPUT_PLAN-FILE-PATH", format!("  {}  ", fixture("plan-with-changes.json")))
        .output()
        .expect("Failed to execute plan-summary");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aws_s3_bucket.example"));
}

#[test]
fn test_writes_step_summary_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("step_summary");
    let output_path = dir.path().join("output");

    let output = plan_summary()
        .arg(fixture("plan-with-mixed-changes.json"))
        .env("GITHUB_STEP_SUMMARY", &summary_path)
        .env("GITHUB_OUTPUT", &output_path)
        .output()
        .expect("Failed to execute plan-summary");

    assert!(output.status.success());

    let summary = std::fs::read_to_string(&summary_path).unwrap();
    assert!(summary.starts_with("<h1>Infrastructure Changes</h1>"));
    assert!(summary.contains("<pre lang=\"terraform\"><code>"));
    assert!(summary.contains("  ~ aws_s3_bucket.updated (update)"));

    let outputs = std::fs::read_to_string(&output_path).unwrap();
    assert!(outputs.starts_with("changes-summary<<ghadelimiter_"));
    assert!(outputs.contains("Plan: 1 to add, 1 to change, 1 to destroy."));

    // The report lives in the job summary, not the log
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Resources to be created:"));
}

#[test]
fn test_missing_path_fails() {
    let output = run_plan_summary(&[]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("::error::Plan file path is required"));
}

#[test]
fn test_nonexistent_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent.json");
    let missing = missing.to_str().unwrap();

    let output = run_plan_summary(&[missing]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("::error::File does not exist: {}", missing)));
}

#[test]
fn test_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_plan_summary(&[dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("::error::Path is a directory, not a file"));
}

#[test]
fn test_malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    std::fs::write(&path, "{ invalid json }").unwrap();

    let output = run_plan_summary(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("::error::Invalid JSON in plan file: "));
}

#[test]
fn test_invalid_structure_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    std::fs::write(&path, r#"{"format_version": "1.0", "terraform_version": "1.5.0"}"#).unwrap();

    let output = run_plan_summary(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "::error::Invalid plan structure: missing required field 'resource_changes'"
    ));
}
