//! Test helpers for behavioral specifications.
//!
//! Provides a small builder DSL for running the lexiscan binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Minimal valid config.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the lexiscan binary
pub fn lexiscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexiscan"));
    // Keep the developer's environment out of the specs.
    cmd.env_remove("LEXISCAN_CONFIG")
        .env_remove("LEXISCAN_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Start building a lexiscan invocation with `args`.
pub fn lexiscan(args: &[&str]) -> RunBuilder {
    RunBuilder {
        args: args.iter().map(|a| a.to_string()).collect(),
        stdin: None,
        dir: None,
        envs: Vec::new(),
    }
}

/// Fluent builder for one invocation.
pub struct RunBuilder {
    args: Vec<String>,
    stdin: Option<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RunBuilder {
    /// Feed `input` on stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Run from `path` (config discovery starts there).
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Expect exit code 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Expect exit code `code`.
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Expect success and parse stdout as JSON.
    pub fn json(self) -> serde_json::Value {
        let run = self.passes();
        serde_json::from_slice(&run.output.stdout).expect("valid JSON")
    }

    fn output(self) -> std::process::Output {
        let mut cmd = lexiscan_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let mut cmd = assert_cmd::Command::from_std(cmd);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.output().expect("command should run")
    }
}

/// Captured output of one invocation.
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        let predicate = predicate.into_predicate();
        assert!(predicate.eval(&stdout), "stdout mismatch\nstdout: {}", stdout);
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        let predicate = predicate.into_predicate();
        assert!(!predicate.eval(&stdout), "stdout unexpectedly matched\nstdout: {}", stdout);
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stderr = self.stderr();
        let predicate = predicate.into_predicate();
        assert!(predicate.eval(&stderr), "stderr mismatch\nstderr: {}", stderr);
        self
    }
}

/// Temporary working directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write lexiscan.toml
    pub fn config(&self, content: &str) {
        self.file("lexiscan.toml", content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
