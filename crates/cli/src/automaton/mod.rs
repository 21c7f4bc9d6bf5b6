// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-pattern matching automaton (Aho-Corasick).
//!
//! Construction runs in three passes over a node arena:
//! 1. trie building: every pattern is threaded through shared prefixes
//! 2. failure links: breadth-first, root children first
//! 3. output closure: each node inherits its failure node's outputs
//!
//! Scanning borrows the finished automaton immutably, so one automaton can
//! serve any number of scans (see [`Automaton::find_iter`]).
//!
//! The alphabet is bytes. Empty patterns terminate at the root and never
//! produce a match.

mod build;
mod scan;

use std::collections::BTreeMap;

pub use scan::{FindIter, Match};

/// Handle of a node in the automaton arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, always the first arena entry.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One trie prefix.
#[derive(Debug, Default)]
struct Node {
    /// Owned forward edges.
    transitions: BTreeMap<u8, NodeId>,
    /// Longest proper suffix that is also a trie path. Root points at itself.
    failure: NodeId,
    /// Patterns that literally end at this prefix.
    terminals: Vec<usize>,
    /// `terminals` plus everything reachable through `failure`.
    outputs: Vec<usize>,
    depth: usize,
}

impl Node {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// A compiled pattern set.
///
/// Immutable once built. Scans take `&self`, so the automaton is `Sync`
/// and can be shared between threads without locking.
#[derive(Debug)]
pub struct Automaton {
    nodes: Vec<Node>,
    patterns: Vec<String>,
}

impl Automaton {
    /// Build an automaton over `patterns`, in order.
    ///
    /// Pattern indices in reported matches follow iteration order.
    /// Duplicates are kept as distinct indices.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        build::build(patterns)
    }

    /// Scan `haystack` lazily, yielding every occurrence of every pattern.
    pub fn find_iter<'a, 'h, H>(&'a self, haystack: &'h H) -> FindIter<'a, 'h>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        FindIter::new(self, haystack.as_ref())
    }

    /// Collect all matches in scan order.
    pub fn find_all<H>(&self, haystack: &H) -> Vec<Match>
    where
        H: AsRef<[u8]> + ?Sized,
    {
        self.find_iter(haystack).collect()
    }

    /// Whether any pattern occurs in `haystack`.
    pub fn is_match<H>(&self, haystack: &H) -> bool
    where
        H: AsRef<[u8]> + ?Sized,
    {
        self.find_iter(haystack).next().is_some()
    }

    /// The pattern set, indexed by pattern id.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Resolve a pattern index back to its string.
    pub fn pattern(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    /// Number of nodes in the arena, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow the transition on `byte` from `id`, if the trie has one.
    pub fn transition(&self, id: NodeId, byte: u8) -> Option<NodeId> {
        self.node(id).transitions.get(&byte).copied()
    }

    /// Failure link of `id`. The root fails to itself.
    pub fn failure(&self, id: NodeId) -> NodeId {
        self.node(id).failure
    }

    /// Pattern indices reported when the scanner lands on `id`.
    pub fn outputs(&self, id: NodeId) -> &[usize] {
        &self.node(id).outputs
    }

    /// Pattern indices that literally end at `id`.
    pub fn terminals(&self, id: NodeId) -> &[usize] {
        &self.node(id).terminals
    }

    /// Length of the prefix spelled by `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    /// Walk `prefix` from the root along trie transitions only.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(NodeId::ROOT, |id, byte| self.transition(id, byte))
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
