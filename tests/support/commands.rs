//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a kvage command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - KVAGE_LOG and NO_COLOR cleared/set for stable output
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kvage").expect("failed to find kvage binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KVAGE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `kvage load <args>`.
    pub fn load(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("load")
            .args(args)
            .output()
            .expect("failed to run kvage load")
    }

    /// Shortcut for `kvage load --format json <args>`.
    pub fn load_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["load", "--format", "json"])
            .args(args)
            .output()
            .expect("failed to run kvage load");
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("load output is json")
    }

    /// Shortcut for `kvage run <args>`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .args(args)
            .output()
            .expect("failed to run kvage run")
    }
}
