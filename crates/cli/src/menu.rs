// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive menu over one text.
//!
//! Reads choices and arguments line by line from any [`BufRead`] and writes
//! prompts and reports to any [`Write`], so sessions can be scripted.

use std::io::{self, BufRead, Write};

use termcolor::NoColor;

use crate::cipher::{Cracker, FrequencyTable, Key};
use crate::output::text::TextFormatter;
use crate::output::{CipherReport, FormatOptions, Report, SearchReport, SpellReport};
use crate::pattern::{Matcher, SearchKind};
use crate::spell::{Dictionary, SpellChecker, SpellOptions};

const MENU: &str = "\
MENU:
1. KMP search
2. Wildcard search
3. Multi-pattern search
4. Spell check
5. Naive search
6. Encode
7. Decode
8. Crack
0. Exit
Choice: ";

/// Resources shared by every menu action.
#[derive(Debug, Default)]
pub struct MenuContext {
    pub dictionary: Dictionary,
    pub options: SpellOptions,
    pub frequencies: FrequencyTable,
}

/// A menu session over one text.
pub struct Menu {
    text: String,
    context: MenuContext,
}

enum Flow {
    Continue,
    Exit,
}

impl Menu {
    pub fn new(text: String, context: MenuContext) -> Self {
        Self { text, context }
    }

    /// Run until the user picks `0` or input ends.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        loop {
            let Some(choice) = prompt(&mut input, &mut output, MENU)? else {
                break;
            };
            match self.dispatch(choice.trim(), &mut input, &mut output)? {
                Flow::Continue => continue,
                Flow::Exit => break,
            }
        }
        tracing::debug!("menu session ended");
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        choice: &str,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        match choice {
            "0" => Ok(Flow::Exit),
            "1" => self.search_one(SearchKind::Kmp, "Pattern: ", input, output),
            "2" => self.search_one(SearchKind::Wildcard, "Pattern with '*': ", input, output),
            "3" => self.search_many(input, output),
            "4" => self.spell(output),
            "5" => self.search_one(SearchKind::Naive, "Pattern: ", input, output),
            "6" => self.cipher(input, output, CipherReport::encoded),
            "7" => self.cipher(input, output, CipherReport::decoded),
            "8" => self.crack(output),
            other => {
                writeln!(output, "Invalid option: {:?}", other)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn search_one<R: BufRead, W: Write>(
        &self,
        kind: SearchKind,
        message: &str,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let Some(pattern) = prompt(input, output, message)? else {
            return Ok(Flow::Exit);
        };
        self.search(kind, &[pattern], output)?;
        Ok(Flow::Continue)
    }

    fn search_many<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let Some(count) = prompt(input, output, "How many patterns? ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(count) = count.trim().parse::<usize>() else {
            writeln!(output, "Invalid number: {:?}", count.trim())?;
            return Ok(Flow::Continue);
        };

        let mut patterns = Vec::new();
        for i in 1..=count {
            let Some(pattern) = prompt(input, output, &format!("Pattern {}: ", i))? else {
                return Ok(Flow::Exit);
            };
            patterns.push(pattern);
        }
        self.search(SearchKind::Multi, &patterns, output)?;
        Ok(Flow::Continue)
    }

    fn search<W: Write>(
        &self,
        kind: SearchKind,
        patterns: &[String],
        output: &mut W,
    ) -> io::Result<()> {
        match Matcher::compile(kind, patterns) {
            Ok(matcher) => {
                let report = SearchReport::run(&matcher, &self.text);
                write_report(output, &Report::Search(report))
            }
            Err(e) => writeln!(output, "error: {}", e),
        }
    }

    fn spell<W: Write>(&self, output: &mut W) -> io::Result<Flow> {
        let checker = SpellChecker::new(&self.context.dictionary, self.context.options);
        let report = SpellReport::new(&self.text, checker.check(&self.text));
        write_report(output, &Report::Spell(report))?;
        Ok(Flow::Continue)
    }

    fn cipher<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        apply: fn(&Key, &str) -> CipherReport,
    ) -> io::Result<Flow> {
        let Some(key) = prompt(input, output, "Key (26 letters): ")? else {
            return Ok(Flow::Exit);
        };
        match Key::parse(&key) {
            Ok(key) => write_report(output, &Report::Cipher(apply(&key, &self.text)))?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn crack<W: Write>(&self, output: &mut W) -> io::Result<Flow> {
        let cracked = Cracker::new(self.context.frequencies).crack(&self.text);
        write_report(output, &Report::Cipher(CipherReport::cracked(cracked)))?;
        Ok(Flow::Continue)
    }
}

fn write_report<W: Write>(output: &mut W, report: &Report) -> io::Result<()> {
    TextFormatter::new(NoColor::new(output), FormatOptions::default()).write_report(report)
}

/// Print `message` and read one line, without its line ending.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
