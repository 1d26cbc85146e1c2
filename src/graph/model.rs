//! Immutable directed adjacency model produced by the parser.

use std::collections::HashMap;

/// Parsed graph: node set in first-seen order, per-node successor lists,
/// and the chosen traversal root.
///
/// Only [`GraphBuilder`](super::GraphBuilder) constructs this, so every
/// adjacency entry refers to a registered node and no source→target pair
/// appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphModel {
    /// Node identifiers in first-seen order.
    node_ids: Vec<String>,
    /// Successor lists, parallel to `node_ids`.
    adjacency: Vec<Vec<String>>,
    /// Identifier -> position in `node_ids`.
    index: HashMap<String, usize>,
    /// Position of the root in `node_ids`.
    start: Option<usize>,
}

impl GraphModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble from builder state. `start` must index into `node_ids`.
    pub(crate) fn from_parts(
        node_ids: Vec<String>,
        adjacency: Vec<Vec<String>>,
        index: HashMap<String, usize>,
        start: Option<usize>,
    ) -> Self {
        Self {
            node_ids,
            adjacency,
            index,
            start,
        }
    }

    /// Node identifiers in first-seen order.
    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    /// Direct successors of `id`, in first-seen order. Empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.index
            .get(id)
            .and_then(|&i| self.adjacency.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(source, successors)` for every node, in node order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.node_ids
            .iter()
            .zip(self.adjacency.iter())
            .map(|(id, targets)| (id.as_str(), targets.as_slice()))
    }

    /// The traversal root, if the model has any nodes.
    pub fn start_node(&self) -> Option<&str> {
        self.start
            .and_then(|i| self.node_ids.get(i))
            .map(String::as_str)
    }

    /// Whether `id` is a registered node.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// True when nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }
}
