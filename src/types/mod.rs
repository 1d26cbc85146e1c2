//! All data types for the graph-trace library.

pub mod error;
pub mod mode;
pub mod step;

pub use error::{TraceError, TraceResult};
pub use mode::TraversalMode;
pub use step::{FrontierKind, StepKind, TraceStep};

/// Marker that starts a comment; the rest of the line is ignored.
pub const COMMENT_MARKER: &str = "%%";

/// Number of steps shown by a replay history, the current one included.
pub const HISTORY_LEN: usize = 9;
