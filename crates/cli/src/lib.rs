pub mod automaton;
pub mod cipher;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod env;
pub mod error;
pub mod menu;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod spell;
pub mod text;

pub use automaton::{Automaton, Match};
pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use output::Report;
pub use reader::{FileContent, FileReader};

#[cfg(test)]
pub mod test_utils;
