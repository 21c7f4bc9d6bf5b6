// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Menu command implementation.

use std::io::IsTerminal;

use lexiscan::cli::MenuArgs;
use lexiscan::config::Config;
use lexiscan::error::ExitCode;
use lexiscan::menu::{Menu, MenuContext};
use lexiscan::reader::FileReader;
use lexiscan::spell::Dictionary;
use lexiscan::text::TextSource;

/// Run the interactive menu.
pub fn run(config: &Config, args: &MenuArgs) -> anyhow::Result<ExitCode> {
    let path = args.dict.as_ref().unwrap_or(&config.spell.dictionary);
    // A missing dictionary only affects spell checking.
    let dictionary = Dictionary::load(path).unwrap_or_else(|e| {
        eprintln!("lexiscan: warning: {}; every word will be reported as unknown", e);
        Dictionary::default()
    });

    let source = args.input.source();
    if source == TextSource::Stdin && std::io::stdin().is_terminal() {
        println!("Enter the text to analyse (blank line to finish):");
    }
    let text = source.load(&FileReader::new())?;

    let menu = Menu::new(
        text,
        MenuContext {
            dictionary,
            options: config.spell.options(),
            frequencies: config.cipher.frequencies,
        },
    );
    menu.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    Ok(ExitCode::Success)
}
