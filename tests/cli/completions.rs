//! Tests for `kvage completions`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kvage"))
        .stdout(predicate::str::contains("--from-env-file"));
}

#[test]
fn test_completions_unknown_shell() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_lists_commands() {
    let t = Test::new();
    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load").and(predicate::str::contains("run")));
}
