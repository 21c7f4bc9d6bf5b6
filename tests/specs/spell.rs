//! Behavioral specs for the spell command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const WORDS: &str = "the/S\ncat\nsat\nmat\n";

fn project_with_dictionary() -> Project {
    let temp = Project::empty();
    temp.file("words.dic", WORDS);
    temp.config("version = 1\n[spell]\ndictionary = \"words.dic\"\n");
    temp
}

/// > Unknown words are listed with suggestions and exit code 1
#[test]
fn unknown_words_exit_one() {
    let temp = project_with_dictionary();
    lexiscan(&["spell", "--text", "teh cat sat"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("spell: 1 unknown word\n  1: teh -> the\n");
}

/// > A clean text exits 0
#[test]
fn clean_text_passes() {
    let temp = project_with_dictionary();
    lexiscan(&["spell", "--text", "The cat sat."])
        .pwd(temp.path())
        .passes()
        .stdout_eq("spell: no unknown words\n");
}

/// > --dict overrides the configured dictionary
#[test]
fn dict_flag_overrides_config() {
    let temp = project_with_dictionary();
    temp.file("other.dic", "dog\n");
    lexiscan(&["spell", "--dict", "other.dic", "--text", "dog"])
        .pwd(temp.path())
        .passes();
}

/// > --suggestions caps the suggestion list, ordered by distance then word
#[test]
fn suggestions_are_capped() {
    let temp = project_with_dictionary();
    lexiscan(&["spell", "--text", "bat", "--suggestions", "2"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("spell: 1 unknown word\n  1: bat -> cat, mat\n");
}

/// > --max-distance 0 disables suggestions
#[test]
fn zero_distance_gives_no_suggestions() {
    let temp = project_with_dictionary();
    lexiscan(&["spell", "--text", "bat", "--max-distance", "0"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("spell: 1 unknown word\n  1: bat (no suggestions)\n");
}

/// > JSON lists unknown words with offsets and suggestions
#[test]
fn spell_json_output() {
    let temp = project_with_dictionary();
    let output = lexiscan(&["spell", "--text", "the kat", "-o", "json"])
        .pwd(temp.path())
        .exits(1)
        .stdout();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["kind"], "spell");
    assert_eq!(json["words"], 2);
    assert_eq!(json["unknown"][0]["word"], "kat");
    assert_eq!(json["unknown"][0]["offset"], 4);
    assert_eq!(json["unknown"][0]["position"], 5);
}

/// > A missing dictionary is reported
#[test]
fn missing_dictionary_fails() {
    let temp = Project::empty();
    lexiscan(&["spell", "--text", "anything"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("pt_BR.dic");
}
