//! CLI integration tests using the REAL bindx binary

mod common;

use common::bindx_cmd;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    bindx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("default application"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--app"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_version_output() {
    bindx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bindx"));
}

#[test]
fn test_no_arguments_prints_usage() {
    bindx_cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Usage: bindx <extension> | --json | -j | --app <Name> [-j]",
        ));
}

#[test]
fn test_verbose_alone_prints_usage() {
    bindx_cmd()
        .arg("-v")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: bindx"));
}

#[test]
fn test_dots_only_is_invalid_input() {
    bindx_cmd()
        .arg("...")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_completions_bash() {
    bindx_cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bindx"));
}

#[test]
fn test_completions_unknown_shell() {
    bindx_cmd()
        .args(["--completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
