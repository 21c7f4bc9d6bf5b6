//! Behavioral specs for the cipher command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > encode with a keyword preserves case and punctuation
#[test]
fn encode_with_keyword() {
    lexiscan(&["cipher", "encode", "--keyword", "zebra", "--text", "Hello, World!"])
        .passes()
        .stdout_eq("encode: key zebracdfghijklmnopqstuvwxy\nFajjm, Vmpjr!\n");
}

/// > decode undoes encode
#[test]
fn decode_with_full_key() {
    lexiscan(&[
        "cipher",
        "decode",
        "--key",
        "ZEBRACDFGHIJKLMNOPQSTUVWXY",
        "--text",
        "Fajjm, Vmpjr!",
    ])
    .passes()
    .stdout_eq("decode: key zebracdfghijklmnopqstuvwxy\nHello, World!\n");
}

/// > A malformed key is a configuration error
#[test]
fn invalid_key_exits_two() {
    lexiscan(&["cipher", "encode", "--key", "abc", "--text", "x"])
        .exits(2)
        .stderr_has("lexiscan: cipher error: key must have exactly 26 letters, got 3");
}

/// > A key with repeated letters is rejected
#[test]
fn duplicate_letter_key_exits_two() {
    lexiscan(&["cipher", "encode", "--key", "aacdefghijklmnopqrstuvwxyz", "--text", "x"])
        .exits(2)
        .stderr_has("repeats letter 'a'");
}

/// > crack recovers the identity key when text follows the table exactly
#[test]
fn crack_with_custom_frequencies() {
    let json = lexiscan(&[
        "cipher",
        "crack",
        "--frequencies",
        "abcdefghijklmnopqrstuvwxyz",
        "--text",
        "aaaabbbcc d",
        "-o",
        "json",
    ])
    .json();
    assert_eq!(json["kind"], "cipher");
    assert_eq!(json["mode"], "crack");
    assert_eq!(json["key"], "abcdefghijklmnopqrstuvwxyz");
    assert_eq!(json["text"], "aaaabbbcc d");
}

/// > crack decodes an encoded text whose letter ranks match the table
#[test]
fn crack_with_language_table() {
    lexiscan(&["cipher", "crack", "--language", "english", "--text", "eeet"])
        .passes()
        .stdout_has("crack: key ")
        .stdout_has("\neeet\n");
}

/// > An invalid frequency table is rejected
#[test]
fn invalid_frequencies_exit_two() {
    lexiscan(&["cipher", "crack", "--frequencies", "abc", "--text", "x"])
        .exits(2)
        .stderr_has("cipher error");
}
