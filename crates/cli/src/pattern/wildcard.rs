// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard search where `*` stands for exactly one byte.

/// Byte that matches any single byte of the haystack.
pub const WILDCARD: u8 = b'*';

/// Whether `pattern` matches `haystack` at offset `start`.
pub fn matches_at(haystack: &[u8], pattern: &[u8], start: usize) -> bool {
    let Some(window) = haystack.get(start..start + pattern.len()) else {
        return false;
    };
    window
        .iter()
        .zip(pattern)
        .all(|(&h, &p)| p == WILDCARD || p == h)
}

/// Start offsets of every wildcard match, overlaps included.
///
/// Patterns longer than the haystack and empty patterns match nowhere.
pub fn find_all(haystack: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > haystack.len() {
        return Vec::new();
    }
    (0..=haystack.len() - pattern.len())
        .filter(|&start| matches_at(haystack, pattern, start))
        .collect()
}

#[cfg(test)]
#[path = "wildcard_tests.rs"]
mod tests;
