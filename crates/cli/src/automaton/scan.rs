// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass scanning of a haystack against a built automaton.

use std::iter::FusedIterator;
use std::ops::Range;

use super::{Automaton, NodeId};

/// One pattern occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Index of the pattern in the automaton's pattern set.
    pub pattern: usize,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Match {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over the matches in a haystack.
///
/// Matches are produced in order of their end offset. Matches that end at
/// the same offset follow the node's output order: patterns ending exactly
/// at the node first, then those inherited through the failure chain.
#[derive(Debug, Clone)]
pub struct FindIter<'a, 'h> {
    automaton: &'a Automaton,
    haystack: &'h [u8],
    /// Bytes consumed so far.
    pos: usize,
    state: NodeId,
    /// Next entry of `state`'s outputs to report.
    pending: usize,
}

impl<'a, 'h> FindIter<'a, 'h> {
    pub(super) fn new(automaton: &'a Automaton, haystack: &'h [u8]) -> Self {
        Self {
            automaton,
            haystack,
            pos: 0,
            state: NodeId::ROOT,
            pending: 0,
        }
    }

    /// Advance from the current state on `byte`, following failure links
    /// until a transition exists or the root is reached.
    fn step(&self, byte: u8) -> NodeId {
        let mut state = self.state;
        loop {
            if let Some(next) = self.automaton.transition(state, byte) {
                return next;
            }
            if state == NodeId::ROOT {
                return NodeId::ROOT;
            }
            state = self.automaton.failure(state);
        }
    }
}

impl Iterator for FindIter<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            let outputs = self.automaton.outputs(self.state);
            if let Some(&pattern) = outputs.get(self.pending) {
                self.pending += 1;
                let len = self.automaton.patterns[pattern].len();
                return Some(Match {
                    pattern,
                    start: self.pos - len,
                    end: self.pos,
                });
            }

            let &byte = self.haystack.get(self.pos)?;
            self.state = self.step(byte);
            self.pos += 1;
            self.pending = 0;
        }
    }
}

impl FusedIterator for FindIter<'_, '_> {}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
