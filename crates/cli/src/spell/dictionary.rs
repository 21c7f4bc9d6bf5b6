// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word lists.
//!
//! File format: one entry per line. Anything from the first `/` on is an
//! affix annotation (hunspell `.dic` style) and is dropped. Entries are
//! lowercased; blank entries are skipped.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;
use crate::reader::FileReader;

/// A set of known words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Load a dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = FileReader::new().read_to_string(path)?;
        let dictionary = Self::parse(&content);
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Parse dictionary file content.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines().map(|line| match line.split_once('/') {
            Some((word, _affixes)) => word,
            None => line,
        }))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
