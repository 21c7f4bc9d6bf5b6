// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reports and their formatting.
//!
//! Every command produces one [`Report`], written either as colored text
//! ([`text::TextFormatter`]) or as a single JSON document
//! ([`json::JsonFormatter`]).

pub mod json;
pub mod text;

use serde::Serialize;

use crate::cipher::{Cracked, Key};
use crate::error::ExitCode;
use crate::pattern::{LineCursor, LineMatch, Matcher, SearchKind};
use crate::spell::{Misspelling, tokenize};

/// Default number of entries shown in text output.
pub const DEFAULT_LIMIT: usize = 50;

/// Output formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Maximum entries to show (None = unlimited).
    pub limit: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl FormatOptions {
    /// Create options with no limit.
    pub fn no_limit() -> Self {
        Self { limit: None }
    }

    /// Create options with a specific limit.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Search(SearchReport),
    Spell(SpellReport),
    Cipher(CipherReport),
}

impl Report {
    /// Exit code for a report that was produced without error.
    pub fn exit_code(&self) -> ExitCode {
        let found = match self {
            Report::Search(search) => !search.matches.is_empty(),
            Report::Spell(spell) => spell.unknown.is_empty(),
            Report::Cipher(_) => true,
        };
        if found {
            ExitCode::Success
        } else {
            ExitCode::NoMatches
        }
    }
}

/// One reported occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// The pattern as given.
    pub pattern: String,
    /// The text it matched (differs from `pattern` for wildcards).
    pub text: String,
    /// 0-based byte offset.
    pub offset: usize,
    /// 1-based position, as displayed.
    pub position: usize,
    /// 1-based line number.
    pub line: u32,
}

impl Hit {
    fn new(pattern: &str, found: LineMatch) -> Self {
        Self {
            pattern: pattern.to_string(),
            text: found.text,
            offset: found.offset,
            position: found.offset + 1,
            line: found.line,
        }
    }
}

/// Every occurrence of the searched patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub algorithm: SearchKind,
    pub patterns: Vec<String>,
    /// In scan order.
    pub matches: Vec<Hit>,
}

impl SearchReport {
    /// Run `matcher` over `content`.
    pub fn run(matcher: &Matcher, content: &str) -> Self {
        let matches = matcher
            .find_all_with_lines(content)
            .into_iter()
            .map(|m| {
                let pattern = matcher.pattern(m.pattern).unwrap_or_default();
                Hit::new(pattern, m)
            })
            .collect();

        Self {
            algorithm: matcher.kind(),
            patterns: matcher.patterns().to_vec(),
            matches,
        }
    }
}

/// A word missing from the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownWord {
    pub word: String,
    pub offset: usize,
    pub position: usize,
    pub line: u32,
    pub suggestions: Vec<String>,
}

/// Spell check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellReport {
    /// Number of words checked.
    pub words: usize,
    /// In text order.
    pub unknown: Vec<UnknownWord>,
}

impl SpellReport {
    pub fn new(content: &str, misspellings: Vec<Misspelling>) -> Self {
        let mut lines = LineCursor::new(content);
        let unknown = misspellings
            .into_iter()
            .map(|m| UnknownWord {
                position: m.offset + 1,
                line: lines.line_at(m.offset),
                word: m.word,
                offset: m.offset,
                suggestions: m.suggestions,
            })
            .collect();

        Self {
            words: tokenize(content).len(),
            unknown,
        }
    }
}

/// Cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    Encode,
    Decode,
    Crack,
}

impl CipherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Encode => "encode",
            CipherMode::Decode => "decode",
            CipherMode::Crack => "crack",
        }
    }
}

/// Cipher outcome: the key used (or recovered) and the resulting text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherReport {
    pub mode: CipherMode,
    pub key: String,
    pub text: String,
}

impl CipherReport {
    pub fn encoded(key: &Key, plaintext: &str) -> Self {
        Self {
            mode: CipherMode::Encode,
            key: key.to_string(),
            text: crate::cipher::encode(plaintext, key),
        }
    }

    pub fn decoded(key: &Key, ciphertext: &str) -> Self {
        Self {
            mode: CipherMode::Decode,
            key: key.to_string(),
            text: crate::cipher::decode(ciphertext, key),
        }
    }

    pub fn cracked(cracked: Cracked) -> Self {
        Self {
            mode: CipherMode::Crack,
            key: cracked.key.to_string(),
            text: cracked.plaintext,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
