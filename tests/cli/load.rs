//! Tests for `kvage load`.

use crate::support::*;

#[test]
fn test_load_env_format() {
    let t = Test::new();
    t.write("app.env", SAMPLE_ENV);
    t.write("motd.txt", "hello world");

    let output = t.load(&[
        "--from-env-file",
        "app.env",
        "--from-literal",
        "MODE=prod",
        "--from-file",
        "motd.txt",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "KEY1=value1\nKEY2=value2\nKEY3=value3\nMODE=prod\nmotd.txt=\"hello world\"\n"
    );
}

#[test]
fn test_load_json_format() {
    let t = Test::new();
    let json = t.load_json(&["--from-literal", "A=1", "--from-literal", "B=x=y"]);
    assert_eq!(
        json,
        serde_json::json!([
            { "key": "A", "value": "1" },
            { "key": "B", "value": "x=y" }
        ])
    );
}

#[test]
fn test_load_decrypts_with_identity() {
    let t = Test::new();
    let recipient = t.identity("key.txt");
    t.write("db.env.age", encrypt_armored("DB_PASSWORD=hunter2\n", &recipient));
    t.write("token.age", encrypt_binary(b"tok", &recipient));

    let json = t.load_json(&[
        "--age-identity",
        "key.txt",
        "--from-env-file",
        "db.env.age",
        "--from-file",
        "token.age",
    ]);
    assert_eq!(
        json,
        serde_json::json!([
            { "key": "DB_PASSWORD", "value": "hunter2" },
            { "key": "token", "value": "tok" }
        ])
    );
}

#[test]
fn test_load_encrypted_literal() {
    let t = Test::new();
    let recipient = t.identity("key.txt");
    let literal = format!("api.age={}", encrypt_armored("k-123", &recipient));

    let json = t.load_json(&["--age-identity", "key.txt", "--from-literal", &literal]);
    assert_eq!(json, serde_json::json!([{ "key": "api", "value": "k-123" }]));
}

#[test]
fn test_load_root_flag() {
    let t = Test::new();
    t.write("nested/app.env", "NESTED=1\n");

    let output = t.load(&["--root", "nested", "--from-env-file", "app.env"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "NESTED=1\n");
}

#[test]
fn test_load_root_applies_to_identities() {
    let t = Test::new();
    let recipient = t.identity("deploy/key.txt");
    t.write("deploy/token.age", encrypt_binary(b"tok", &recipient));

    let output = t.load(&[
        "--root",
        "deploy",
        "--age-identity",
        "key.txt",
        "--from-file",
        "token.age",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "token=tok\n");
    assert!(!t.path("key.txt").exists());
}

#[test]
fn test_load_bare_key_reads_environment() {
    let t = Test::new();
    t.write("app.env", "FROM_SHELL\n");

    let output = t
        .cmd()
        .env("FROM_SHELL", "shell-value")
        .args(["load", "--from-env-file", "app.env"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "FROM_SHELL=shell-value\n");
}

#[test]
fn test_load_nothing() {
    let t = Test::new();
    let output = t.load(&[]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}
