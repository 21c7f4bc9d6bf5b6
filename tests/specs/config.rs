//! Behavioral specs for configuration discovery and validation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > lexiscan.toml in the working directory is picked up
#[test]
fn config_limit_applies() {
    let temp = Project::empty();
    temp.config("version = 1\n[output]\nlimit = 1\n");
    lexiscan(&["search", "a", "--text", "aa"])
        .pwd(temp.path())
        .passes()
        .stdout_has("Stopped after 1 of 2 entries.");
}

/// > -C selects a config file explicitly
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[output]\nlimit = 1\n");
    lexiscan(&["-C", "custom.toml", "search", "a", "--text", "aa"])
        .pwd(temp.path())
        .passes()
        .stdout_has("Stopped after 1 of 2 entries.");
}

/// > LEXISCAN_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file("env.toml", "version = 1\n[output]\nlimit = 1\n");
    lexiscan(&["search", "a", "--text", "aa"])
        .pwd(temp.path())
        .env("LEXISCAN_CONFIG", "env.toml")
        .passes()
        .stdout_has("Stopped after 1 of 2 entries.");
}

/// > An explicit config that does not exist is an error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();
    lexiscan(&["-C", "absent.toml", "search", "a", "--text", "a"])
        .pwd(temp.path())
        .exits(3);
}

/// > Unsupported versions are configuration errors
#[test]
fn unsupported_version_exits_two() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    lexiscan(&["search", "a", "--text", "a"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > version is required
#[test]
fn missing_version_exits_two() {
    let temp = Project::empty();
    temp.config("[output]\nlimit = 3\n");
    lexiscan(&["search", "a", "--text", "a"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config(&format!("{MINIMAL_CONFIG}colour = true\n"));
    lexiscan(&["search", "a", "--text", "a"])
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `colour`");
}

/// > The configured frequency table drives crack
#[test]
fn configured_frequencies_drive_crack() {
    let temp = Project::empty();
    temp.config("version = 1\n[cipher]\nfrequencies = \"abcdefghijklmnopqrstuvwxyz\"\n");
    let json = lexiscan(&["cipher", "crack", "--text", "aab", "-o", "json"])
        .pwd(temp.path())
        .json();
    assert_eq!(json["key"], "abcdefghijklmnopqrstuvwxyz");
}

/// > LEXISCAN_LOG enables logs on stderr
#[test]
fn log_env_enables_logging() {
    lexiscan(&["multi", "a", "--text", "a"])
        .env("LEXISCAN_LOG", "debug")
        .passes()
        .stderr_has("built automaton");
}
