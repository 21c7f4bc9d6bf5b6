#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{temp_project, temp_project_with_config};

fn path() -> PathBuf {
    PathBuf::from("lexiscan.toml")
}

#[test]
fn parse_minimal_config_uses_defaults() {
    let config = parse("version = 1\n", &path()).unwrap();
    assert_eq!(config.version, 1);
    assert_eq!(config.spell.dictionary, PathBuf::from("pt_BR.dic"));
    assert_eq!(config.spell.max_distance, 2);
    assert_eq!(config.spell.max_suggestions, 3);
    assert_eq!(config.cipher.frequencies, FrequencyTable::english());
    assert_eq!(config.output.limit, 50);
}

#[test]
fn parse_full_config() {
    let content = r#"
version = 1

[spell]
dictionary = "words.txt"
max_distance = 1
max_suggestions = 5

[cipher]
frequencies = "aeosridmntcupvlgqbfhzjxkwy"

[output]
limit = 10
"#;
    let config = parse(content, &path()).unwrap();
    assert_eq!(config.spell.dictionary, PathBuf::from("words.txt"));
    assert_eq!(
        config.spell.options(),
        SpellOptions {
            max_distance: 1,
            max_suggestions: 5
        }
    );
    assert_eq!(config.cipher.frequencies, FrequencyTable::portuguese());
    assert_eq!(config.output.limit, 10);
}

#[test]
fn parse_missing_version_fails() {
    let err = parse("[output]\nlimit = 3\n", &path()).unwrap_err();
    assert!(err.to_string().contains("missing required field: version"));
}

#[test]
fn parse_unsupported_version_fails() {
    let err = parse("version = 2\n", &path()).unwrap_err();
    assert!(err.to_string().contains("unsupported config version 2"));
}

#[test]
fn parse_invalid_frequency_table_fails() {
    let err = parse("version = 1\n[cipher]\nfrequencies = \"abc\"\n", &path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn parse_with_warnings_accepts_unknown_keys() {
    let config = parse_with_warnings("version = 1\ncolour = true\n", &path()).unwrap();
    assert_eq!(config.version, 1);
}

#[test]
fn unknown_keys_are_listed_with_section() {
    let table: toml::Table = r#"
version = 1
extra = 1
[spell]
dictionary = "x"
langauge = "pt"
[output]
limit = 3
"#
    .parse()
    .unwrap();
    assert_eq!(unknown_keys(&table), vec!["extra", "spell.langauge"]);
}

#[test]
fn discover_without_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = discover(None, dir.path()).unwrap();
    assert_eq!(config.version, SUPPORTED_VERSION);
    assert_eq!(config.output.limit, 50);
}

#[test]
fn discover_finds_file_in_directory() {
    let dir = temp_project_with_config("version = 1\n[output]\nlimit = 7\n");
    let config = discover(None, dir.path()).unwrap();
    assert_eq!(config.output.limit, 7);
}

#[test]
fn discover_resolves_dictionary_next_to_config() {
    let dir = temp_project();
    let config = discover(None, dir.path()).unwrap();
    assert_eq!(config.spell.dictionary, dir.path().join("pt_BR.dic"));
}

#[test]
fn discover_explicit_missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("custom.toml");
    let result = discover(Some(&missing), dir.path());
    assert!(matches!(result, Err(Error::Io { .. })));
}
