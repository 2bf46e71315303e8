//! Error reporting tests.

use crate::support::*;

#[test]
fn test_invalid_literal() {
    let t = Test::new();
    let output = t.load(&["--from-literal", "novalue"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid literal source novalue");
    assert_stderr_contains(&output, "key=value");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_ambiguous_file_spec() {
    let t = Test::new();
    let output = t.load(&["--from-file", "a=b=c"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "key names or file paths cannot contain '='");
}

#[test]
fn test_missing_file_names_category() {
    let t = Test::new();
    let output = t.load(&["--from-file", "missing.txt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "file sources: [\"missing.txt\"]");
}

#[test]
fn test_missing_identity_is_fatal() {
    let t = Test::new();
    let output = t.load(&["--age-identity", "nope.txt", "--from-literal", "A=1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "age identity source files");
    assert_stderr_contains(&output, "--age-identity");
}

#[test]
fn test_decryption_failure_hint() {
    let t = Test::new();
    let stranger = age::x25519::Identity::generate().to_public();
    t.write("s.age", encrypt_binary(b"x", &stranger));

    let output = t.load(&["--from-file", "s.age"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt s.age");
    assert_stderr_contains(&output, "pass the matching key with --age-identity");
}

#[test]
fn test_invalid_env_key() {
    let t = Test::new();
    t.write("bad.env", "GOOD=1\nBAD KEY=2\n");

    let output = t.load(&["--from-env-file", "bad.env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key name 'BAD KEY'");
    assert_stdout_excludes(&output, "GOOD");
}
