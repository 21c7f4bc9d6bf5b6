// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text acquisition.
//!
//! Interactive entry reads lines until the first empty one, joining them
//! with the trailing space each line receives, so words never run together
//! across line breaks.

use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::reader::FileReader;

/// Read lines until an empty line or end of input.
///
/// Each line is followed by a single space in the result. Line endings are
/// dropped.
pub fn read_until_blank(mut input: impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            break;
        }
        text.push_str(trimmed);
        text.push(' ');
    }

    Ok(text)
}

/// Where the text to analyse comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    /// Standard input, terminated by a blank line.
    Stdin,
}

impl TextSource {
    pub fn load(&self, reader: &FileReader) -> Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => reader.read_to_string(path),
            TextSource::Stdin => read_until_blank(io::stdin().lock()).map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
