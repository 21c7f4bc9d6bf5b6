// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    single = { "say hello world", "hello", &[4] },
    repeated = { "abracadabra", "abra", &[0, 7] },
    overlapping = { "aaaa", "aa", &[0, 1, 2] },
    absent = { "abc", "d", &[] },
    longer_than_text = { "ab", "abc", &[] },
    empty_pattern = { "abc", "", &[] },
    empty_text = { "", "a", &[] },
    whole_text = { "abc", "abc", &[0] },
)]
fn finds_every_start(text: &str, pattern: &str, expected: &[usize]) {
    assert_eq!(find_all(text.as_bytes(), pattern.as_bytes()), expected);
}
