//! Integration tests for argument parsing, help and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn binary() -> Command {
    Command::cargo_bin("an-structure").expect("Failed to find an-structure binary")
}

/// With subcommands required, no arguments should fail and show usage.
#[test]
fn test_cli_no_arguments() {
    binary()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    binary()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("an-structure"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("show-config-path"));
}

#[test]
fn test_cli_invalid_subcommand() {
    binary()
        .arg("reserve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_cli_invalid_bundle_group() {
    binary()
        .args(["bundle", "shot-4d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_completions_bash() {
    binary()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("an-structure"));
}
