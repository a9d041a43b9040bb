#![allow(deprecated)] // TODO: move from cargo_bin to the cargo_bin_cmd! macro

use assert_cmd::Command;
use predicates::prelude::*;
mod common;
use common::TestProject;

/// Help lists the shared flags and the classroom flags
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("appfleet").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stack"))
        .stdout(predicate::str::contains("--fleet"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--stop"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("appfleet-batch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("appfleet-batch"));
}

#[test]
fn test_prewarm_help() {
    let mut cmd = Command::cargo_bin("appfleet-prewarm").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--capacity"))
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--csv").not());
}

/// The URL-only binary cannot stop the fleet
#[test]
fn test_url_only_has_no_stop() {
    let mut cmd = Command::cargo_bin("appfleet-url").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stop").not());

    let mut cmd = Command::cargo_bin("appfleet-url").unwrap();
    cmd.arg("--stop")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_stop_conflicts_with_csv() {
    let mut cmd = Command::cargo_bin("appfleet").unwrap();
    cmd.arg("--stop")
        .arg("--csv")
        .arg("students.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_csv_conflicts_with_count() {
    let mut cmd = Command::cargo_bin("appfleet-batch").unwrap();
    cmd.args(["--csv", "students.csv", "--count", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_capacity_must_be_positive() {
    let mut cmd = Command::cargo_bin("appfleet-prewarm").unwrap();
    cmd.args(["--capacity", "0"]).assert().failure();
}

#[test]
fn test_validity_range() {
    let mut cmd = Command::cargo_bin("appfleet").unwrap();
    cmd.args(["--validity", "604801"]).assert().failure();
}

/// Empty values fail before any remote call
#[test]
fn test_empty_flag_rejected() {
    let project = TestProject::new();
    project
        .command("appfleet")
        .args(["--stack", "", "--profile", "personal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("All flags are required"))
        .stderr(predicate::str::contains("--stack"));
}

#[test]
fn test_empty_flag_rejected_with_stop() {
    let project = TestProject::new();
    project
        .command("appfleet")
        .args(["--fleet", "", "--stop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("All flags are required"));
}

#[test]
fn test_missing_roster_file() {
    let project = TestProject::new();
    project
        .command("appfleet")
        .args(["--csv", "nobody.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open roster"));
}

#[test]
fn test_roster_with_invalid_user_id() {
    let project = TestProject::new();
    let roster = project.write_roster("Ada Lovelace\nAlan/Turing\n");

    project
        .command("appfleet")
        .arg("--csv")
        .arg(roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains '/'"));
}

#[test]
fn test_config_file_unknown_key() {
    let project = TestProject::new();
    project.write_config("defaults:\n  stak: typo\n");

    project
        .command("appfleet")
        .env_remove("APPFLEET_CONFIG_PATH")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config file"));
}

#[test]
fn test_count_upper_bound() {
    let mut cmd = Command::cargo_bin("appfleet-batch").unwrap();
    cmd.args(["--count", "1001"]).assert().failure();
}

#[test]
fn test_roster_with_non_ascii_name() {
    let project = TestProject::new();
    let roster = project.write_roster("Ada\nJosé\n");

    project
        .command("appfleet")
        .arg("--csv")
        .arg(roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains 'é'"));
}

#[test]
fn test_roster_with_empty_name_column() {
    let project = TestProject::new();
    let roster = project.write_roster("Ada\n,period 2\n");

    project
        .command("appfleet-batch")
        .arg("--csv")
        .arg(roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: first column (name) is empty"));
}

/// An environment variable overrides the config file
#[test]
fn test_env_overrides_config_file() {
    let project = TestProject::new();
    project.write_config("defaults:\n  stack: Robotics\n  user: lab\n");
    let roster = project.write_roster("Ada\n");

    project
        .command("appfleet")
        .env_remove("APPFLEET_CONFIG_PATH")
        .env("APPFLEET_STACK", "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("All flags are required (empty: --stack)"));

    project
        .command("appfleet")
        .env_remove("APPFLEET_CONFIG_PATH")
        .env("APPFLEET_USER", "env/user")
        .arg("--csv")
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("user id 'env/user-Ada'"));
}

/// A flag overrides the environment variable of the same setting
#[test]
fn test_flag_overrides_env() {
    let project = TestProject::new();
    let roster = project.write_roster("Ada\n");

    project
        .command("appfleet")
        .env("APPFLEET_USER", "env/user")
        .args(["--user", "flag/user", "--csv"])
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("user id 'flag/user-Ada'"))
        .stderr(predicate::str::contains("env/user").not());

    project
        .command("appfleet")
        .env("APPFLEET_STACK", "   ")
        .args(["--stack", "Robotics", "--csv", "nobody.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open roster"));
}

#[test]
fn test_error_reported_once() {
    let project = TestProject::new();
    let output = project
        .command("appfleet")
        .args(["--fleet", ""])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("All flags are required").count(), 1);
}
