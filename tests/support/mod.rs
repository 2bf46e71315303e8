//! Test support utilities for kvage integration tests.
//!
//! Provides isolated project directories, age fixtures and CLI helpers.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use age::secrecy::ExposeSecret;
use age::x25519;
use kvage::Loader;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Absolute path of a file in the project directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the project directory, creating parent directories.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Generate an age identity, save it as `name` and return its recipient.
    pub fn identity(&self, name: &str) -> x25519::Recipient {
        let identity = x25519::Identity::generate();
        self.write(
            name,
            format!(
                "# public key: {}\n{}\n",
                identity.to_public(),
                identity.to_string().expose_secret()
            ),
        );
        identity.to_public()
    }

    /// Library loader rooted at the project directory, without SSH probing.
    pub fn loader(&self) -> Loader {
        Loader::from_root(self.dir.path()).with_ssh_keys(Vec::new())
    }

    /// Directory path helper for assertions.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

fn encrypt_to<W: Write>(plaintext: &[u8], recipient: &x25519::Recipient, output: W) -> W {
    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(recipient as &dyn age::Recipient))
            .expect("failed to create encryptor");
    let mut writer = encryptor
        .wrap_output(output)
        .expect("failed to wrap output");
    writer.write_all(plaintext).expect("failed to write plaintext");
    writer.finish().expect("failed to finish encryption")
}

/// Encrypt to binary age format.
pub fn encrypt_binary(plaintext: &[u8], recipient: &x25519::Recipient) -> Vec<u8> {
    encrypt_to(plaintext, recipient, Vec::new())
}

/// Encrypt to ASCII-armored age format.
pub fn encrypt_armored(plaintext: &str, recipient: &x25519::Recipient) -> String {
    let mut encrypted = Vec::new();
    let armored =
        age::armor::ArmoredWriter::wrap_output(&mut encrypted, age::armor::Format::AsciiArmor)
            .expect("failed to create armored writer");
    encrypt_to(plaintext.as_bytes(), recipient, armored)
        .finish()
        .expect("failed to finish armor");
    String::from_utf8(encrypted).expect("armor is ascii")
}

/// Indent every line of `block` by `prefix`.
pub fn indent(block: &str, prefix: &str) -> String {
    block
        .lines()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}
