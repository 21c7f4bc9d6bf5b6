// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers for every search kind.

use serde::Serialize;

use super::{Kmp, naive, wildcard};
use crate::automaton::Automaton;

/// Search algorithm requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Compare at every offset.
    Naive,
    /// Knuth-Morris-Pratt.
    #[default]
    Kmp,
    /// `*` matches any single character.
    Wildcard,
    /// Aho-Corasick over several patterns at once.
    Multi,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Naive => "naive",
            SearchKind::Kmp => "kmp",
            SearchKind::Wildcard => "wildcard",
            SearchKind::Multi => "multi",
        }
    }
}

/// A compiled search over one or more patterns.
pub enum Matcher {
    Naive(String),
    Kmp(Kmp, String),
    Wildcard(String),
    Multi(Automaton),
}

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Index of the pattern that matched.
    pub pattern: usize,
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// A match with resolved line number.
#[derive(Debug, Clone)]
pub struct LineMatch {
    /// Index of the pattern that matched.
    pub pattern: usize,
    /// 1-based line number.
    pub line: u32,
    /// The matched text.
    pub text: String,
    /// Byte offset in content.
    pub offset: usize,
}

/// Error during matcher compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("{kind} search takes exactly one pattern, got {count}")]
    ExpectedSingle { kind: &'static str, count: usize },

    #[error("empty pattern")]
    Empty,
}

impl Matcher {
    /// Compile `patterns` for the given search kind.
    ///
    /// Single-pattern kinds reject anything but one non-empty pattern.
    /// `Multi` accepts any pattern set, including an empty one.
    pub fn compile(kind: SearchKind, patterns: &[String]) -> Result<Self, PatternError> {
        Ok(match kind {
            SearchKind::Multi => Matcher::Multi(Automaton::new(patterns)),
            SearchKind::Naive => Matcher::Naive(single_pattern(kind, patterns)?),
            SearchKind::Kmp => {
                let pattern = single_pattern(kind, patterns)?;
                Matcher::Kmp(Kmp::new(&pattern), pattern)
            }
            SearchKind::Wildcard => Matcher::Wildcard(single_pattern(kind, patterns)?),
        })
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            Matcher::Naive(_) => SearchKind::Naive,
            Matcher::Kmp(..) => SearchKind::Kmp,
            Matcher::Wildcard(_) => SearchKind::Wildcard,
            Matcher::Multi(_) => SearchKind::Multi,
        }
    }

    /// The compiled patterns, in index order.
    pub fn patterns(&self) -> &[String] {
        match self {
            Matcher::Naive(p) | Matcher::Kmp(_, p) | Matcher::Wildcard(p) => std::slice::from_ref(p),
            Matcher::Multi(automaton) => automaton.patterns(),
        }
    }

    /// Resolve a match's pattern index back to the pattern string.
    pub fn pattern(&self, index: usize) -> Option<&str> {
        match self {
            Matcher::Naive(p) | Matcher::Kmp(_, p) | Matcher::Wildcard(p) => {
                (index == 0).then_some(p.as_str())
            }
            Matcher::Multi(automaton) => automaton.pattern(index),
        }
    }

    /// Find all matches in content.
    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        let bytes = content.as_bytes();
        let single = |starts: Vec<usize>, len: usize| -> Vec<PatternMatch> {
            starts
                .into_iter()
                .map(|start| PatternMatch {
                    pattern: 0,
                    start,
                    end: start + len,
                })
                .collect()
        };

        match self {
            Matcher::Naive(p) => single(naive::find_all(bytes, p.as_bytes()), p.len()),
            Matcher::Kmp(kmp, p) => single(kmp.find_all(bytes), p.len()),
            Matcher::Wildcard(p) => single(wildcard::find_all(bytes, p.as_bytes()), p.len()),
            Matcher::Multi(automaton) => automaton
                .find_iter(bytes)
                .map(|m| PatternMatch {
                    pattern: m.pattern,
                    start: m.start,
                    end: m.end,
                })
                .collect(),
        }
    }

    /// Find all matches with line numbers.
    ///
    /// Lines are resolved in one pass over the content, so the cost stays
    /// linear in the content plus the number of matches.
    pub fn find_all_with_lines(&self, content: &str) -> Vec<LineMatch> {
        let mut lines = LineCursor::new(content);
        self.find_all(content)
            .into_iter()
            .map(|m| LineMatch {
                pattern: m.pattern,
                line: lines.line_at(m.start),
                text: String::from_utf8_lossy(&content.as_bytes()[m.start..m.end]).into_owned(),
                offset: m.start,
            })
            .collect()
    }
}

fn single_pattern(kind: SearchKind, patterns: &[String]) -> Result<String, PatternError> {
    match patterns {
        [pattern] if pattern.is_empty() => Err(PatternError::Empty),
        [pattern] => Ok(pattern.clone()),
        _ => Err(PatternError::ExpectedSingle {
            kind: kind.as_str(),
            count: patterns.len(),
        }),
    }
}

/// Resolves byte offsets to line numbers for offsets that mostly move forward.
///
/// Each call only counts the newlines between the previous offset and the new
/// one. Stepping back (a long pattern reported after a shorter one ending at
/// the same place) counts the skipped span in reverse.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    content: &'a [u8],
    offset: usize,
    line: u32,
}

impl<'a> LineCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content: content.as_bytes(),
            offset: 0,
            line: 1,
        }
    }

    /// 1-based line number of `offset`, clamped to the content length.
    pub fn line_at(&mut self, offset: usize) -> u32 {
        let offset = offset.min(self.content.len());
        if offset >= self.offset {
            self.line += newlines(&self.content[self.offset..offset]);
        } else {
            self.line -= newlines(&self.content[offset..self.offset]);
        }
        self.offset = offset;
        self.line
    }
}

fn newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

/// Convert byte offset to 1-based line number.
pub fn byte_offset_to_line(content: &str, offset: usize) -> u32 {
    LineCursor::new(content).line_at(offset)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
