//! graph-trace — tolerant flowchart-text parsing and replayable traversal traces.
//!
//! Turns loosely formatted directed-graph text (`A --> B`, `A -.-> B`,
//! `A ==> B`, labelled arrows, `%%` comments) into a [`GraphModel`], then
//! records breadth-first, depth-first or linear traversals of it as an
//! ordered sequence of [`TraceStep`]s for step-by-step playback.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod parser;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{frame, Frame, FrontierDelta, NodeDiff};
pub use graph::{
    bfs_trace, dfs_trace, generate_trace, linear_trace, trace_text, GraphBuilder, GraphModel,
};
pub use parser::parse;
pub use types::{
    FrontierKind, StepKind, TraceError, TraceResult, TraceStep, TraversalMode, HISTORY_LEN,
};
