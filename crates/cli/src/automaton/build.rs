// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automaton construction passes.

use std::collections::VecDeque;

use super::{Automaton, Node, NodeId};

pub(super) fn build(patterns: Vec<String>) -> Automaton {
    let mut nodes = build_trie(&patterns);
    let order = breadth_first(&nodes);
    resolve_failures(&mut nodes, &order);
    propagate_outputs(&mut nodes, &order);

    tracing::debug!(
        patterns = patterns.len(),
        nodes = nodes.len(),
        "built automaton"
    );

    Automaton { nodes, patterns }
}

/// Insert every pattern, sharing common prefixes.
fn build_trie(patterns: &[String]) -> Vec<Node> {
    let mut nodes = vec![Node::new(0)];

    for (index, pattern) in patterns.iter().enumerate() {
        let mut current = NodeId::ROOT;
        for &byte in pattern.as_bytes() {
            current = match nodes[current.index()].transitions.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = NodeId(nodes.len() as u32);
                    let depth = nodes[current.index()].depth + 1;
                    nodes.push(Node::new(depth));
                    nodes[current.index()].transitions.insert(byte, child);
                    child
                }
            };
        }
        nodes[current.index()].terminals.push(index);
    }

    nodes
}

/// Non-root nodes in breadth-first order.
///
/// Both later passes need a node's failure target finalised before the node
/// itself, and the failure target is always strictly shallower.
fn breadth_first(nodes: &[Node]) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(nodes.len().saturating_sub(1));
    let mut queue: VecDeque<NodeId> = nodes[NodeId::ROOT.index()]
        .transitions
        .values()
        .copied()
        .collect();

    while let Some(id) = queue.pop_front() {
        order.push(id);
        queue.extend(nodes[id.index()].transitions.values().copied());
    }

    order
}

fn resolve_failures(nodes: &mut [Node], order: &[NodeId]) {
    for &parent in std::iter::once(&NodeId::ROOT).chain(order) {
        let edges: Vec<(u8, NodeId)> = nodes[parent.index()]
            .transitions
            .iter()
            .map(|(&byte, &child)| (byte, child))
            .collect();

        for (byte, child) in edges {
            let failure = if parent == NodeId::ROOT {
                NodeId::ROOT
            } else {
                fallback(nodes, nodes[parent.index()].failure, byte)
            };
            nodes[child.index()].failure = failure;
        }
    }
}

/// Walk the failure chain from `start` until some node can consume `byte`.
fn fallback(nodes: &[Node], start: NodeId, byte: u8) -> NodeId {
    let mut f = start;
    loop {
        if let Some(&next) = nodes[f.index()].transitions.get(&byte) {
            return next;
        }
        if f == NodeId::ROOT {
            return NodeId::ROOT;
        }
        f = nodes[f.index()].failure;
    }
}

fn propagate_outputs(nodes: &mut [Node], order: &[NodeId]) {
    // Root keeps an empty output set: empty patterns match nowhere.
    for &id in order {
        let failure = nodes[id.index()].failure;
        let inherited = nodes[failure.index()].outputs.clone();
        let node = &mut nodes[id.index()];
        node.outputs = node.terminals.clone();
        node.outputs.extend(inherited);
    }
}
