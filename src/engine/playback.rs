//! Pure replay helpers over a recorded trace.
//!
//! The caller owns the playback position and passes it in explicitly; nothing
//! here keeps state between calls.

use serde::Serialize;

use crate::types::{TraceError, TraceResult, TraceStep, HISTORY_LEN};

/// Frontier change between a step and the one before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontierDelta {
    /// Entries present now but not in the previous frontier.
    pub added: Vec<String>,
    /// Entries of the previous frontier no longer present.
    pub removed: Vec<String>,
}

impl FrontierDelta {
    /// True when the frontier did not change.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Everything a presentation layer needs to draw one position of a trace.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    /// Zero-based position in the trace.
    pub index: usize,
    pub step: &'a TraceStep,
    pub delta: FrontierDelta,
    /// Nodes to highlight: this step's node and those of the following
    /// steps inside the window.
    pub highlighted: Vec<&'a str>,
    /// `"<position>/<length>"`, one-based.
    pub counter: String,
    /// Up to [`HISTORY_LEN`] steps ending with this one.
    pub history: &'a [TraceStep],
}

/// Compare the frontier at `index` against the one at `index - 1`.
///
/// Membership is by set, so reordering alone produces no delta. Before
/// the first step the frontier is empty.
pub fn frontier_delta(trace: &[TraceStep], index: usize) -> FrontierDelta {
    let frontier_at = |i: usize| trace.get(i).map(|s| s.frontier.as_slice()).unwrap_or(&[]);
    let current = frontier_at(index);
    let previous = index.checked_sub(1).map(frontier_at).unwrap_or(&[]);

    FrontierDelta {
        added: current
            .iter()
            .filter(|id| !previous.contains(id))
            .cloned()
            .collect(),
        removed: previous
            .iter()
            .filter(|id| !current.contains(id))
            .cloned()
            .collect(),
    }
}

/// Node ids of steps `index .. index + window`, clamped to the trace.
/// A window of zero behaves as one.
pub fn highlight_window(trace: &[TraceStep], index: usize, window: usize) -> Vec<&str> {
    trace
        .iter()
        .skip(index)
        .take(window.max(1))
        .map(|s| s.node_id.as_str())
        .collect()
}

/// One-based progress label, e.g. `3/7`.
pub fn step_counter(index: usize, len: usize) -> String {
    format!("{}/{}", index.saturating_add(1).min(len), len)
}

/// The last [`HISTORY_LEN`] steps up to and including `index`.
pub fn history(trace: &[TraceStep], index: usize) -> &[TraceStep] {
    let end = index.saturating_add(1).min(trace.len());
    let start = index.saturating_sub(HISTORY_LEN - 1).min(end);
    &trace[start..end]
}

/// Assemble the frame at `index`, or `None` past the end of the trace.
pub fn frame(trace: &[TraceStep], index: usize, window: usize) -> Option<Frame<'_>> {
    let step = trace.get(index)?;
    Some(Frame {
        index,
        step,
        delta: frontier_delta(trace, index),
        highlighted: highlight_window(trace, index, window),
        counter: step_counter(index, trace.len()),
        history: history(trace, index),
    })
}

/// Like [`frame`], but reports an out-of-range position as an error.
pub fn frame_at(trace: &[TraceStep], index: usize, window: usize) -> TraceResult<Frame<'_>> {
    frame(trace, index, window).ok_or(TraceError::StepOutOfRange {
        index,
        len: trace.len(),
    })
}
