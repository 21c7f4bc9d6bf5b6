// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    literal = { "the cat sat", "sat", &[8] },
    one_star = { "the cat sat", "*at", &[4, 8] },
    all_stars = { "abc", "**", &[0, 1] },
    star_in_middle = { "casa cosa", "c*sa", &[0, 5] },
    no_match = { "abc", "x*", &[] },
    longer_than_text = { "ab", "a**", &[] },
    empty_pattern = { "abc", "", &[] },
    literal_star_in_text = { "a*b", "a*b", &[0] },
)]
fn finds_wildcard_matches(text: &str, pattern: &str, expected: &[usize]) {
    assert_eq!(find_all(text.as_bytes(), pattern.as_bytes()), expected);
}

#[test]
fn star_matches_exactly_one_byte() {
    assert!(matches_at(b"ab", b"a*", 0));
    assert!(!matches_at(b"a", b"a*", 0));
}

#[test]
fn matches_at_out_of_range_is_false() {
    assert!(!matches_at(b"abc", b"c", 5));
}

#[test]
fn without_stars_agrees_with_naive() {
    let text = b"mississippi";
    assert_eq!(
        find_all(text, b"issi"),
        crate::pattern::naive::find_all(text, b"issi")
    );
}
