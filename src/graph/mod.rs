//! In-memory graph model, its builder, and recorded traversals.

pub mod builder;
pub mod model;
pub mod traversal;

pub use builder::GraphBuilder;
pub use model::GraphModel;
pub use traversal::{bfs_trace, dfs_trace, generate_trace, linear_trace, trace_text};
