// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt single-pattern search.

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, for
/// every `i`.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        table[i] = len;
    }

    table
}

/// A pattern with its precomputed failure table.
#[derive(Debug, Clone)]
pub struct Kmp {
    pattern: Vec<u8>,
    table: Vec<usize>,
}

impl Kmp {
    pub fn new(pattern: impl AsRef<[u8]>) -> Self {
        let pattern = pattern.as_ref().to_vec();
        let table = failure_table(&pattern);
        Self { pattern, table }
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Start offsets of every occurrence, overlaps included.
    ///
    /// An empty pattern matches nowhere.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        let m = self.pattern.len();
        if m == 0 {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut matched = 0;
        for (i, &byte) in haystack.iter().enumerate() {
            while matched > 0 && byte != self.pattern[matched] {
                matched = self.table[matched - 1];
            }
            if byte == self.pattern[matched] {
                matched += 1;
            }
            if matched == m {
                found.push(i + 1 - m);
                matched = self.table[m - 1];
            }
        }
        found
    }
}

#[cfg(test)]
#[path = "kmp_tests.rs"]
mod tests;
