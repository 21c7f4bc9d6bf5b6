// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cipher command implementation.

use lexiscan::cipher::Cracker;
use lexiscan::cli::{CipherArgs, CipherCommand};
use lexiscan::config::Config;
use lexiscan::error::{Error, ExitCode};
use lexiscan::output::{CipherReport, Report};
use lexiscan::reader::FileReader;

/// Run the cipher command.
pub fn run(config: &Config, args: &CipherArgs) -> anyhow::Result<ExitCode> {
    let reader = FileReader::new();

    match &args.command {
        CipherCommand::Encode(args) => {
            let key = args.key.resolve().map_err(Error::from)?;
            let text = args.input.source().load(&reader)?;
            let report = CipherReport::encoded(&key, &text);
            crate::emit(&Report::Cipher(report), &args.output, config)
        }
        CipherCommand::Decode(args) => {
            let key = args.key.resolve().map_err(Error::from)?;
            let text = args.input.source().load(&reader)?;
            let report = CipherReport::decoded(&key, &text);
            crate::emit(&Report::Cipher(report), &args.output, config)
        }
        CipherCommand::Crack(args) => {
            let table = args.table(config.cipher.frequencies).map_err(Error::from)?;
            let text = args.input.source().load(&reader)?;
            let report = CipherReport::cracked(Cracker::new(table).crack(&text));
            crate::emit(&Report::Cipher(report), &args.output, config)
        }
    }
}
