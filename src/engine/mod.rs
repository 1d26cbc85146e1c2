//! Replay and edit-tracking helpers built on top of the core.

pub mod diff;
pub mod playback;

pub use diff::NodeDiff;
pub use playback::{
    frame, frame_at, frontier_delta, highlight_window, history, step_counter, Frame,
    FrontierDelta,
};
