// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text search.
//!
//! Four search kinds share one result shape:
//! - Naive: compare at every offset
//! - KMP: single literal with a failure table
//! - Wildcard: single pattern, `*` matches any one byte
//! - Multi: many literals at once via [`crate::automaton`]

pub mod kmp;
pub mod matcher;
pub mod naive;
pub mod wildcard;

pub use kmp::Kmp;
pub use matcher::{
    LineCursor, LineMatch, Matcher, PatternError, PatternMatch, SearchKind, byte_offset_to_line,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
