// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! multi: 4 matches
//!   2: his
//!   4: she
//!   5: he
//!   5: hers
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{CipherReport, FormatOptions, Hit, Report, SearchReport, SpellReport, UnknownWord};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    entries_shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            entries_shown: 0,
            truncated: false,
        }
    }

    /// Write a complete report, followed by a truncation notice if the
    /// entry limit was hit.
    pub fn write_report(&mut self, report: &Report) -> std::io::Result<()> {
        self.entries_shown = 0;
        self.truncated = false;
        let total = match report {
            Report::Search(search) => {
                self.write_search(search)?;
                search.matches.len()
            }
            Report::Spell(spell) => {
                self.write_spell(spell)?;
                spell.unknown.len()
            }
            Report::Cipher(cipher) => {
                self.write_cipher(cipher)?;
                0
            }
        };
        self.write_truncation_message(total)
    }

    fn write_title(&mut self, title: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::title())?;
        write!(self.out, "{}", title)?;
        self.out.reset()?;
        write!(self.out, ": ")
    }

    fn write_search(&mut self, report: &SearchReport) -> std::io::Result<()> {
        self.write_title(report.algorithm.as_str())?;
        match report.matches.len() {
            0 => writeln!(self.out, "no matches")?,
            1 => writeln!(self.out, "1 match")?,
            n => writeln!(self.out, "{} matches", n)?,
        }

        for hit in &report.matches {
            if self.limit_reached() {
                break;
            }
            self.write_hit(hit)?;
            self.entries_shown += 1;
        }
        Ok(())
    }

    fn write_hit(&mut self, hit: &Hit) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::position())?;
        write!(self.out, "{}", hit.position)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", hit.pattern)?;
        self.out.reset()?;

        if hit.text != hit.pattern {
            write!(self.out, " ({})", hit.text)?;
        }
        writeln!(self.out)
    }

    fn write_spell(&mut self, report: &SpellReport) -> std::io::Result<()> {
        self.write_title("spell")?;
        match report.unknown.len() {
            0 => writeln!(self.out, "no unknown words")?,
            1 => writeln!(self.out, "1 unknown word")?,
            n => writeln!(self.out, "{} unknown words", n)?,
        }

        for word in &report.unknown {
            if self.limit_reached() {
                break;
            }
            self.write_unknown_word(word)?;
            self.entries_shown += 1;
        }
        Ok(())
    }

    fn write_unknown_word(&mut self, word: &UnknownWord) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::position())?;
        write!(self.out, "{}", word.position)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        self.out.set_color(&scheme::unknown_word())?;
        write!(self.out, "{}", word.word)?;
        self.out.reset()?;

        if word.suggestions.is_empty() {
            return writeln!(self.out, " (no suggestions)");
        }

        write!(self.out, " -> ")?;
        for (i, suggestion) in word.suggestions.iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            self.out.set_color(&scheme::suggestion())?;
            write!(self.out, "{}", suggestion)?;
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    fn write_cipher(&mut self, report: &CipherReport) -> std::io::Result<()> {
        self.write_title(report.mode.as_str())?;
        write!(self.out, "key ")?;
        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", report.key)?;
        self.out.reset()?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", report.text)
    }

    fn limit_reached(&mut self) -> bool {
        if let Some(limit) = self.options.limit
            && self.entries_shown >= limit
        {
            self.truncated = true;
        }
        self.truncated
    }

    fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            self.out.set_color(&scheme::notice())?;
            write!(
                self.out,
                "Stopped after {} of {} entries. Use --no-limit to see all.",
                limit, total
            )?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Check if the last report was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Entries shown for the last report.
    pub fn entries_shown(&self) -> usize {
        self.entries_shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
