// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexiscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use lexiscan::cli::{Cli, Command, OutputArgs, OutputFormat};
use lexiscan::completions;
use lexiscan::config::{self, Config};
use lexiscan::env::names;
use lexiscan::error::ExitCode;
use lexiscan::output::Report;
use lexiscan::output::json::JsonFormatter;
use lexiscan::output::text::TextFormatter;

mod cmd_cipher;
mod cmd_menu;
mod cmd_search;
mod cmd_spell;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::LEXISCAN_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lexiscan: {}", e);
            match e.downcast_ref::<lexiscan::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Search(args)) => cmd_search::run(&load_config(&cli)?, args),
        Some(Command::Multi(args)) => cmd_search::run_multi(&load_config(&cli)?, args),
        Some(Command::Spell(args)) => cmd_spell::run(&load_config(&cli)?, args),
        Some(Command::Cipher(args)) => cmd_cipher::run(&load_config(&cli)?, args),
        Some(Command::Menu(args)) => cmd_menu::run(&load_config(&cli)?, args),
        Some(Command::Completions(args)) => {
            completions::write(args.shell, &mut std::io::stdout().lock());
            Ok(ExitCode::Success)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    Ok(config::discover(cli.config.as_deref(), &cwd)?)
}

/// Print `report` in the requested format and map it to an exit code.
pub(crate) fn emit(
    report: &Report,
    args: &OutputArgs,
    config: &Config,
) -> anyhow::Result<ExitCode> {
    match args.output {
        OutputFormat::Text => {
            let options = args.format_options(config.output.limit);
            let mut formatter = TextFormatter::stdout(args.color_choice(), options);
            formatter.write_report(report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(report)?;
        }
    }
    Ok(report.exit_code())
}
