// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spell command implementation.

use lexiscan::cli::SpellArgs;
use lexiscan::config::Config;
use lexiscan::error::ExitCode;
use lexiscan::output::{Report, SpellReport};
use lexiscan::reader::FileReader;
use lexiscan::spell::{Dictionary, SpellChecker};

/// Run the spell command.
pub fn run(config: &Config, args: &SpellArgs) -> anyhow::Result<ExitCode> {
    let path = args.dict.as_ref().unwrap_or(&config.spell.dictionary);
    let dictionary = Dictionary::load(path)?;

    let mut options = config.spell.options();
    if let Some(max_distance) = args.max_distance {
        options.max_distance = max_distance;
    }
    if let Some(suggestions) = args.suggestions {
        options.max_suggestions = suggestions;
    }

    let text = args.input.source().load(&FileReader::new())?;
    let checker = SpellChecker::new(&dictionary, options);
    let report = SpellReport::new(&text, checker.check(&text));

    crate::emit(&Report::Spell(report), &args.output, config)
}
