// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts for lexiscan.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name completions are registered for.
const BIN_NAME: &str = "lexiscan";

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Generate the completion script for `shell` as a string.
pub fn generate_script(shell: Shell) -> String {
    let mut buf = Vec::new();
    write(shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
