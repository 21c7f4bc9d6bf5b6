//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

/// Creates a temp directory with a minimal lexiscan.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lexiscan.toml"), config).unwrap();
    dir
}

/// Creates a temp directory holding a dictionary file; returns its path too.
pub fn temp_dictionary(words: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.dic");
    fs::write(&path, words).unwrap();
    (dir, path)
}
