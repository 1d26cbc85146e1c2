//! One recorded event of a traversal trace.

use serde::Serialize;

/// Distinguishes informational steps from visit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Start-of-traversal or enumeration event.
    Info,
    /// A node was removed from the frontier and visited.
    Visit,
}

impl StepKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Visit => "visit",
        }
    }
}

/// Which abstract structure a frontier snapshot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrontierKind {
    Queue,
    Stack,
    /// No frontier at all.
    Linear,
}

impl FrontierKind {
    /// Return a human-readable name for this structure.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Queue => "Queue",
            Self::Stack => "Stack",
            Self::Linear => "Linear",
        }
    }
}

impl std::fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single entry of a trace, carrying enough state to redraw the
/// frontier and the visited set at that instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// The node this step concerns.
    pub node_id: String,
    /// Human-readable description of the event.
    pub message: String,
    pub kind: StepKind,
    /// Frontier removal performed, e.g. `Dequeued A`. `None` for informational steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Nodes added to the frontier by this step, in insertion order.
    pub newly_discovered: Vec<String>,
    /// Full frontier after this step. Queues read head to tail, stacks bottom to top.
    pub frontier: Vec<String>,
    pub frontier_kind: FrontierKind,
    /// Every node visited so far, in visitation order.
    pub visited: Vec<String>,
}

impl TraceStep {
    /// An informational step with no action and nothing discovered.
    pub fn info(
        node_id: &str,
        message: String,
        frontier: Vec<String>,
        frontier_kind: FrontierKind,
    ) -> Self {
        Self {
            node_id: node_id.to_string(),
            message,
            kind: StepKind::Info,
            action: None,
            newly_discovered: Vec::new(),
            frontier,
            frontier_kind,
            visited: Vec::new(),
        }
    }

    /// True if this step records a visit.
    pub fn is_visit(&self) -> bool {
        self.kind == StepKind::Visit
    }
}
