//! Tests for `kvage run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_pairs() {
    let t = Test::new();
    t.write("app.env", "GREETING=hello\n");

    let output = t.run(&[
        "--from-env-file",
        "app.env",
        "--from-literal",
        "NAME=kvage",
        "sh",
        "-c",
        "echo \"$GREETING $NAME\"",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "hello kvage");
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::new();
    let output = t.run(&["sh", "-c", "exit 7"]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_run_requires_command() {
    let t = Test::new();
    let output = t.run(&["--from-literal", "A=1"]);
    assert_failure(&output);
}

#[test]
fn test_run_does_not_start_on_load_error() {
    let t = Test::new();
    let output = t.run(&["--from-file", "missing.txt", "sh", "-c", "echo started"]);
    assert_failure(&output);
    assert_stdout_excludes(&output, "started");
}
