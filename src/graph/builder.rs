//! Accumulates parsed declarations into a [`GraphModel`].

use std::collections::HashMap;

use super::GraphModel;

/// Mutable accumulator for a [`GraphModel`]. Nothing is observable until
/// [`build`](Self::build) hands over the finished model.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_ids: Vec<String>,
    adjacency: Vec<Vec<String>>,
    index: HashMap<String, usize>,
    has_incoming: Vec<bool>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node (no-op if already known). Returns its position.
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }
        let i = self.node_ids.len();
        self.node_ids.push(id.to_string());
        self.adjacency.push(Vec::new());
        self.has_incoming.push(false);
        self.index.insert(id.to_string(), i);
        i
    }

    /// Register a directed edge. Both endpoints are registered (source
    /// first), the target is marked as having an incoming edge, and
    /// repeated edges are dropped.
    pub fn add_edge(&mut self, source: &str, target: &str) -> &mut Self {
        let s = self.add_node(source);
        let t = self.add_node(target);
        self.has_incoming[t] = true;
        let targets = &mut self.adjacency[s];
        if !targets.iter().any(|existing| existing == target) {
            targets.push(target.to_string());
        }
        self
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Finish the model, choosing the root: the first node without an
    /// incoming edge, else the first node.
    pub fn build(self) -> GraphModel {
        let start = self
            .has_incoming
            .iter()
            .position(|&incoming| !incoming)
            .or(if self.node_ids.is_empty() { None } else { Some(0) });

        match start.and_then(|i| self.node_ids.get(i)) {
            Some(root) => log::debug!(
                "built graph: {} nodes, root {}",
                self.node_ids.len(),
                root
            ),
            None => log::debug!("built empty graph"),
        }

        GraphModel::from_parts(self.node_ids, self.adjacency, self.index, start)
    }
}
