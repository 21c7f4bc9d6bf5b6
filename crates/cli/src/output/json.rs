// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! One pretty-printed document per report, tagged with its `kind` and the
//! time it was produced. Entry limits do not apply.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use super::Report;

/// Report with its generation time.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    timestamp: String,
    #[serde(flatten)]
    report: &'a Report,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &Report) -> std::io::Result<()> {
        let envelope = Envelope {
            timestamp: timestamp(),
            report,
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Current time as RFC 3339 with second precision (e.g. `2026-01-21T10:30:00Z`).
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
