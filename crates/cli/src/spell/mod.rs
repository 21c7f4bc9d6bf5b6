// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictionary-based spell checking with edit-distance suggestions.

mod dictionary;
mod distance;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use dictionary::Dictionary;
pub use distance::levenshtein;

/// Maximal runs of ASCII letters.
#[allow(clippy::expect_used)]
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("valid regex"));

/// A lowercased word and its byte offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub offset: usize,
}

/// Split `text` into lowercased alphabetic words.
pub fn tokenize(text: &str) -> Vec<Token> {
    WORD_RE
        .find_iter(text)
        .map(|m| Token {
            word: m.as_str().to_ascii_lowercase(),
            offset: m.start(),
        })
        .collect()
}

/// Suggestion limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellOptions {
    /// Largest edit distance a suggestion may have.
    pub max_distance: usize,
    /// Suggestions kept per unknown word.
    pub max_suggestions: usize,
}

impl Default for SpellOptions {
    fn default() -> Self {
        Self {
            max_distance: 2,
            max_suggestions: 3,
        }
    }
}

/// An occurrence of a word missing from the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub word: String,
    /// Byte offset of the word in the checked text.
    pub offset: usize,
    pub suggestions: Vec<String>,
}

/// Checks text against a borrowed dictionary.
pub struct SpellChecker<'d> {
    dictionary: &'d Dictionary,
    options: SpellOptions,
}

impl<'d> SpellChecker<'d> {
    pub fn new(dictionary: &'d Dictionary, options: SpellOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Every unknown word occurrence, in text order.
    pub fn check(&self, text: &str) -> Vec<Misspelling> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.dictionary.contains(&token.word))
            .map(|token| Misspelling {
                suggestions: self.suggest(&token.word),
                word: token.word,
                offset: token.offset,
            })
            .collect()
    }

    /// Dictionary words closest to `word`, nearest first, ties alphabetical.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        if self.options.max_suggestions == 0 {
            return Vec::new();
        }

        let word_len = word.chars().count();
        let mut candidates: Vec<(usize, &str)> = self
            .dictionary
            .words()
            // Length difference is a lower bound on the distance.
            .filter(|entry| entry.chars().count().abs_diff(word_len) <= self.options.max_distance)
            .map(|entry| (levenshtein(word, entry), entry))
            .filter(|&(distance, _)| distance <= self.options.max_distance)
            .collect();

        candidates.sort_unstable();
        candidates
            .into_iter()
            .take(self.options.max_suggestions)
            .map(|(_, entry)| entry.to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
