// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::cipher::{CipherError, FrequencyTable, Key};
use crate::env::names;
use crate::output::FormatOptions;
use crate::pattern::SearchKind;
use crate::text::TextSource;

/// Pattern search, spell checking and substitution ciphers over text
#[derive(Parser)]
#[command(name = "lexiscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = names::LEXISCAN_CONFIG)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find every occurrence of one pattern (KMP by default)
    Search(SearchArgs),
    /// Find every occurrence of several patterns in one pass
    Multi(MultiArgs),
    /// Report words missing from a dictionary
    Spell(SpellArgs),
    /// Substitution cipher: encode, decode or crack
    Cipher(CipherArgs),
    /// Interactive menu over one text
    Menu(MenuArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

/// Where to read the text from.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Text to analyse
    #[arg(long, value_name = "STRING", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Inline text, else the file, else stdin up to a blank line.
    pub fn source(&self) -> TextSource {
        match (&self.text, &self.file) {
            (Some(text), _) => TextSource::Inline(text.clone()),
            (None, Some(path)) => TextSource::File(path.clone()),
            (None, None) => TextSource::Stdin,
        }
    }
}

/// How to print the report.
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum entries to display (default: 50)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show all entries (no limit)
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,
}

impl OutputArgs {
    /// Entry limit from the flags, falling back to `configured`.
    pub fn format_options(&self, configured: usize) -> FormatOptions {
        if self.no_limit {
            FormatOptions::no_limit()
        } else {
            FormatOptions::with_limit(self.limit.unwrap_or(configured))
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        crate::color::choose(self.color, self.no_color)
    }
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Pattern to search for
    pub pattern: String,

    /// Compare at every offset instead of using KMP
    #[arg(long, conflicts_with = "wildcard")]
    pub naive: bool,

    /// Treat `*` as matching any single character
    #[arg(long)]
    pub wildcard: bool,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SearchArgs {
    pub fn kind(&self) -> SearchKind {
        if self.naive {
            SearchKind::Naive
        } else if self.wildcard {
            SearchKind::Wildcard
        } else {
            SearchKind::Kmp
        }
    }
}

#[derive(clap::Args)]
pub struct MultiArgs {
    /// Patterns to search for
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct SpellArgs {
    /// Dictionary file, one word per line (overrides config)
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Largest edit distance for suggestions (overrides config)
    #[arg(long, value_name = "N")]
    pub max_distance: Option<usize>,

    /// Suggestions shown per unknown word (overrides config)
    #[arg(long, value_name = "N")]
    pub suggestions: Option<usize>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct CipherArgs {
    #[command(subcommand)]
    pub command: CipherCommand,
}

#[derive(Subcommand)]
pub enum CipherCommand {
    /// Encrypt the text
    Encode(KeyedArgs),
    /// Decrypt the text
    Decode(KeyedArgs),
    /// Recover the key by letter frequency
    Crack(CrackArgs),
}

/// Key given either in full or as a keyword.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// Full key: 26 distinct letters
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Keyword; the rest of the alphabet follows in order
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,
}

impl KeyArgs {
    pub fn resolve(&self) -> Result<Key, CipherError> {
        match (&self.key, &self.keyword) {
            (Some(key), _) => Key::parse(key),
            (None, Some(keyword)) => Ok(Key::from_keyword(keyword)),
            (None, None) => Err(CipherError::MissingKey),
        }
    }
}

#[derive(clap::Args)]
pub struct KeyedArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct CrackArgs {
    /// Plaintext letters from most to least frequent (overrides config)
    #[arg(long, value_name = "LETTERS", conflicts_with = "language")]
    pub frequencies: Option<String>,

    /// Built-in frequency table
    #[arg(long)]
    pub language: Option<Language>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CrackArgs {
    /// Frequency table from the flags, falling back to `configured`.
    pub fn table(&self, configured: FrequencyTable) -> Result<FrequencyTable, CipherError> {
        match (&self.frequencies, self.language) {
            (Some(letters), _) => FrequencyTable::parse(letters),
            (None, Some(language)) => Ok(language.table()),
            (None, None) => Ok(configured),
        }
    }
}

/// Languages with a built-in frequency table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    English,
    Portuguese,
}

impl Language {
    pub fn table(self) -> FrequencyTable {
        match self {
            Language::English => FrequencyTable::english(),
            Language::Portuguese => FrequencyTable::portuguese(),
        }
    }
}

#[derive(clap::Args)]
pub struct MenuArgs {
    /// Dictionary for spell checking (overrides config)
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
