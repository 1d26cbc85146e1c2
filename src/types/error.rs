//! Error types for the graph-trace library.
//!
//! Parsing and trace generation are total and never produce these; they
//! are raised by the outer surfaces (file loading, mode selection, replay).

use thiserror::Error;

/// All errors that can occur outside the parsing/tracing core.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Traversal mode name not recognised.
    #[error("Unknown traversal mode: {0} (expected bfs, dfs or linear)")]
    UnknownMode(String),

    /// Replay position past the end of the trace.
    #[error("Step {index} out of range for a trace of {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-trace operations.
pub type TraceResult<T> = Result<T, TraceError>;
