//! Binary tests for startup failures that never reach the network

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_TEMPLATE: &str = "---\ntitle: Join the hackathon\nlabels:\n  - announcement\n---\nCome build with us.\n";

/// `seed` in an empty directory with no credentials and no `gh` on PATH
fn seed(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("seed").unwrap();
    cmd.current_dir(dir.path())
        .env("PATH", "")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("ISSUE_TEMPLATE_PATH")
        .env_remove("SOURCE_REPO")
        .env_remove("EXCEL_FILE_PATH")
        .env_remove("GITHUB_API_URL")
        .env_remove("DELAY_BETWEEN_REQUESTS")
        .env_remove("DRY_RUN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_token_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), VALID_TEMPLATE).unwrap();

    seed(&dir)
        .arg("broadcast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN is not set"));
}

#[test]
fn test_blank_token_counts_as_missing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), VALID_TEMPLATE).unwrap();

    seed(&dir)
        .env("GITHUB_TOKEN", "   ")
        .args(["broadcast", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN is not set"));
}

#[test]
fn test_dry_run_env_accepts_boolish_values() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), VALID_TEMPLATE).unwrap();

    for value in ["1", "yes", "TRUE", "on", "0", "false"] {
        // Parsing succeeds, so the run stops at the missing credential
        // instead of with a usage error.
        seed(&dir)
            .env("DRY_RUN", value)
            .arg("broadcast")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("GITHUB_TOKEN is not set"));
    }
}

#[test]
fn test_template_without_front_matter_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), "just a body\n").unwrap();

    seed(&dir)
        .env("GITHUB_TOKEN", "unused")
        .arg("broadcast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed template"));
}

#[test]
fn test_missing_template_is_fatal() {
    let dir = TempDir::new().unwrap();

    seed(&dir)
        .env("GITHUB_TOKEN", "unused")
        .args(["broadcast", "--template", "nowhere.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed template"));
}

#[test]
fn test_invalid_source_repository_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), VALID_TEMPLATE).unwrap();

    seed(&dir)
        .env("GITHUB_TOKEN", "unused")
        .args(["broadcast", "--source", "not-a-repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner/name"));
}

#[test]
fn test_missing_spreadsheet_is_fatal() {
    let dir = TempDir::new().unwrap();

    seed(&dir)
        .env("GITHUB_TOKEN", "unused")
        .args(["proposals", "--spreadsheet", "ideas.xlsx", "--repo", "ideas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spreadsheet error"));
}

#[test]
fn test_inverted_row_range_is_fatal() {
    let dir = TempDir::new().unwrap();

    seed(&dir)
        .args([
            "proposals",
            "--spreadsheet",
            "ideas.xlsx",
            "--repo",
            "ideas",
            "--start",
            "10",
            "--end",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row range"));
}

#[test]
fn test_invalid_delay_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issue-template.md"), VALID_TEMPLATE).unwrap();

    seed(&dir)
        .env("DELAY_BETWEEN_REQUESTS", "soon")
        .arg("broadcast")
        .assert()
        .failure();
}

#[test]
fn test_auth_setup_explains_token() {
    let dir = TempDir::new().unwrap();

    seed(&dir)
        .args(["auth", "setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GITHUB_TOKEN"));
}
