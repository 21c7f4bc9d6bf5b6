// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search and multi command implementation.

use lexiscan::cli::{InputArgs, MultiArgs, OutputArgs, SearchArgs};
use lexiscan::config::Config;
use lexiscan::error::{Error, ExitCode};
use lexiscan::output::{Report, SearchReport};
use lexiscan::pattern::{Matcher, SearchKind};
use lexiscan::reader::FileReader;

/// Run the search command.
pub fn run(config: &Config, args: &SearchArgs) -> anyhow::Result<ExitCode> {
    search(
        config,
        args.kind(),
        std::slice::from_ref(&args.pattern),
        &args.input,
        &args.output,
    )
}

/// Run the multi command.
pub fn run_multi(config: &Config, args: &MultiArgs) -> anyhow::Result<ExitCode> {
    search(config, SearchKind::Multi, &args.patterns, &args.input, &args.output)
}

fn search(
    config: &Config,
    kind: SearchKind,
    patterns: &[String],
    input: &InputArgs,
    output: &OutputArgs,
) -> anyhow::Result<ExitCode> {
    // Reject bad patterns before blocking on stdin.
    let matcher = Matcher::compile(kind, patterns).map_err(Error::from)?;
    let text = input.source().load(&FileReader::new())?;

    let report = SearchReport::run(&matcher, &text);
    tracing::debug!(
        kind = kind.as_str(),
        matches = report.matches.len(),
        "search finished"
    );

    crate::emit(&Report::Search(report), output, config)
}
