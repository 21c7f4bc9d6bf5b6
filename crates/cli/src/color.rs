// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection logic:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → use color

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::{self, names};

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if env::is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    if env::is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || env::is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Apply `--color` / `--no-color` flags over the environment.
pub fn choose(force: bool, disable: bool) -> ColorChoice {
    if disable {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        resolve_color()
    }
}

/// Color scheme for reports.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan report title (e.g., "multi").
    pub fn title() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        spec
    }

    /// Bold pattern name.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Yellow position / line number.
    pub fn position() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Red unknown word.
    pub fn unknown_word() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green suggestion.
    pub fn suggestion() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Default (no color) for notices.
    pub fn notice() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
