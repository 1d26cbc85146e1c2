//! Node-set changes between two successive parses of the same document.

use serde::Serialize;

use crate::graph::GraphModel;

/// How the node set changed from one model to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeDiff {
    /// Nodes only in the current model, in current order.
    pub added: Vec<String>,
    /// Nodes only in the previous model, in previous order.
    pub removed: Vec<String>,
    /// Nodes in both, in current order.
    pub retained: Vec<String>,
}

impl NodeDiff {
    /// Diff `previous` against `current`.
    pub fn between(previous: &GraphModel, current: &GraphModel) -> Self {
        let (retained, added): (Vec<String>, Vec<String>) = current
            .node_ids()
            .iter()
            .cloned()
            .partition(|id| previous.contains(id));
        let removed = previous
            .node_ids()
            .iter()
            .filter(|id| !current.contains(id))
            .cloned()
            .collect();

        Self {
            added,
            removed,
            retained,
        }
    }

    /// True when no node was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
