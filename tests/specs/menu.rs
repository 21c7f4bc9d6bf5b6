//! Behavioral specs for the interactive menu.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > The menu reads the text, then choices, from stdin
#[test]
fn menu_runs_multi_search_from_stdin() {
    let temp = Project::empty();
    temp.file("words.dic", "she\n");
    lexiscan(&["menu", "--dict", "words.dic"])
        .pwd(temp.path())
        .stdin("ahishers\n\n3\n2\nhe\nshe\n0\n")
        .passes()
        .stdout_has("How many patterns? Pattern 1: Pattern 2: multi: 2 matches\n  4: she\n  5: he\n");
}

/// > End of input leaves the menu cleanly
#[test]
fn menu_exits_at_end_of_input() {
    let temp = Project::empty();
    temp.file("words.dic", "word\n");
    lexiscan(&["menu", "--dict", "words.dic", "--text", "word"])
        .pwd(temp.path())
        .passes()
        .stdout_has("MENU:");
}

/// > A missing dictionary only warns
#[test]
fn menu_without_dictionary_warns() {
    let temp = Project::empty();
    lexiscan(&["menu", "--text", "some text"])
        .pwd(temp.path())
        .stdin("4\n0\n")
        .passes()
        .stderr_has("lexiscan: warning:")
        .stdout_has("spell: 2 unknown words");
}
