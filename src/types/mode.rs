//! Traversal mode selector.

use serde::Serialize;

use super::{TraceError, TraceResult};

/// Which algorithm a trace is generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Plain enumeration in declaration order, no frontier.
    Linear,
}

impl TraversalMode {
    /// All modes, in the order they are offered to users.
    pub const ALL: [TraversalMode; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::Linear];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Linear => "linear",
        }
    }

    /// Parse a mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Some(Self::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Some(Self::DepthFirst),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name), but reports the rejected name.
    pub fn parse(name: &str) -> TraceResult<Self> {
        Self::from_name(name).ok_or_else(|| TraceError::UnknownMode(name.to_string()))
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
