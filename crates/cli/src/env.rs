// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by lexiscan.

/// Variable names, in one place so lookups cannot drift apart.
pub mod names {
    /// Disables color output (any value).
    pub const NO_COLOR: &str = "NO_COLOR";
    /// Forces color output (any value).
    pub const COLOR: &str = "COLOR";
    /// Claude Code agent environment.
    pub const CLAUDE_CODE: &str = "CLAUDE_CODE";
    /// Codex agent environment.
    pub const CODEX: &str = "CODEX";
    /// Cursor agent environment.
    pub const CURSOR: &str = "CURSOR";
    /// CI environment.
    pub const CI: &str = "CI";
    /// Tracing log filter.
    pub const LEXISCAN_LOG: &str = "LEXISCAN_LOG";
    /// Config file path.
    pub const LEXISCAN_CONFIG: &str = "LEXISCAN_CONFIG";
}

/// Whether `name` is set, to any value (including empty).
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

/// Whether the process runs under an AI agent or CI.
pub fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .into_iter()
        .any(is_set)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
