//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the ds-pathway binary
pub fn pathway_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ds-pathway")
}

/// An isolated config and data directory for one test.
///
/// Every command run through it sees the same saved state and nothing from
/// the user's real configuration.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a Command with isolated config directory and plain output.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(pathway_bin());
        cmd.env("DS_PATHWAY_CONFIG_DIR", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs with `input` on stdin (for confirmation prompts).
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for command")
    }

    /// Runs a command that must succeed.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_success(&output, args);
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Runs a command that must succeed and print JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("Invalid JSON from {args:?}: {e}\n{stdout}"))
    }

    /// Writes a file inside the test directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// The full backup document for the current saved state.
    pub fn snapshot(&self) -> serde_json::Value {
        self.run_json(&["data", "export", "--stdout"])
    }
}

pub fn assert_success(output: &Output, args: &[&str]) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "{args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
