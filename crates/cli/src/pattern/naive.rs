// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brute-force search: compare the pattern at every offset.

/// Start offsets of every occurrence of `pattern` in `haystack`.
///
/// Occurrences may overlap. An empty pattern matches nowhere.
pub fn find_all(haystack: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    haystack
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| start)
        .collect()
}

#[cfg(test)]
#[path = "naive_tests.rs"]
mod tests;
