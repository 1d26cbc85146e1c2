//! Phase 3 tests: replay helpers and node diffs between parses.

use graph_trace::engine::diff::NodeDiff;
use graph_trace::engine::playback::{
    frame, frame_at, frontier_delta, highlight_window, history, step_counter,
};
use graph_trace::graph::traversal::{bfs_trace, linear_trace};
use graph_trace::parser::parse;
use graph_trace::types::{TraceError, TraceStep, HISTORY_LEN};

// ==================== Helper ====================

/// Frontiers: [Root], [X, Y], [Y], [].
fn diamond_bfs() -> Vec<TraceStep> {
    bfs_trace(&parse("Root --> X\nRoot --> Y\nX --> Y"))
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==================== Frontier Delta Tests ====================

#[test]
fn test_delta_first_step_adds_root() {
    let trace = diamond_bfs();
    let delta = frontier_delta(&trace, 0);
    assert_eq!(delta.added, ids(&["Root"]));
    assert!(delta.removed.is_empty());
}

#[test]
fn test_delta_between_steps() {
    let trace = diamond_bfs();

    let delta = frontier_delta(&trace, 1);
    assert_eq!(delta.added, ids(&["X", "Y"]));
    assert_eq!(delta.removed, ids(&["Root"]));

    let delta = frontier_delta(&trace, 2);
    assert!(delta.added.is_empty());
    assert_eq!(delta.removed, ids(&["X"]));

    let delta = frontier_delta(&trace, 3);
    assert_eq!(delta.removed, ids(&["Y"]));
}

#[test]
fn test_delta_out_of_range_is_empty() {
    let trace = diamond_bfs();
    assert!(frontier_delta(&trace, 99).is_empty());
    assert!(frontier_delta(&[], 0).is_empty());
}

// ==================== Window / Counter / History Tests ====================

#[test]
fn test_highlight_window() {
    let trace = diamond_bfs();
    assert_eq!(highlight_window(&trace, 1, 2), vec!["Root", "X"]);
    assert_eq!(highlight_window(&trace, 1, 0), vec!["Root"]);
    assert_eq!(highlight_window(&trace, 3, 5), vec!["Y"]);
    assert!(highlight_window(&trace, 10, 3).is_empty());
}

#[test]
fn test_step_counter() {
    assert_eq!(step_counter(0, 4), "1/4");
    assert_eq!(step_counter(3, 4), "4/4");
    assert_eq!(step_counter(10, 4), "4/4");
    assert_eq!(step_counter(0, 0), "0/0");
}

#[test]
fn test_history_depth() {
    let text: String = (0..12).map(|i| format!("N{}\n", i)).collect();
    let trace = linear_trace(&parse(&text));
    assert_eq!(trace.len(), 12);

    let recent = history(&trace, 11);
    assert_eq!(recent.len(), HISTORY_LEN);
    assert_eq!(recent[0].node_id, "N3");
    assert_eq!(recent[HISTORY_LEN - 1].node_id, "N11");

    assert_eq!(history(&trace, 2).len(), 3);
    assert!(history(&trace, 50).is_empty());
}

// ==================== Frame Tests ====================

#[test]
fn test_frame_contents() {
    let trace = diamond_bfs();
    let f = frame(&trace, 1, 2).unwrap();
    assert_eq!(f.index, 1);
    assert_eq!(f.step.node_id, "Root");
    assert_eq!(f.counter, "2/4");
    assert_eq!(f.highlighted, vec!["Root", "X"]);
    assert_eq!(f.delta.added, ids(&["X", "Y"]));
    assert_eq!(f.history.len(), 2);
}

#[test]
fn test_frame_out_of_range() {
    let trace = diamond_bfs();
    assert!(frame(&trace, 4, 1).is_none());
    match frame_at(&trace, 4, 1) {
        Err(TraceError::StepOutOfRange { index, len }) => {
            assert_eq!(index, 4);
            assert_eq!(len, 4);
        }
        other => panic!("expected StepOutOfRange, got {:?}", other.map(|f| f.index)),
    }
}

#[test]
fn test_frame_serializes() {
    let trace = diamond_bfs();
    let value = serde_json::to_value(frame(&trace, 2, 1).unwrap()).unwrap();
    assert_eq!(value["counter"], "3/4");
    assert_eq!(value["step"]["node_id"], "X");
    assert_eq!(value["delta"]["removed"], serde_json::json!(["X"]));
}

// ==================== Node Diff Tests ====================

#[test]
fn test_diff_added_removed_retained() {
    let previous = parse("A --> B\nB --> C");
    let current = parse("A --> B\nB --> D");
    let diff = NodeDiff::between(&previous, &current);
    assert_eq!(diff.added, ids(&["D"]));
    assert_eq!(diff.removed, ids(&["C"]));
    assert_eq!(diff.retained, ids(&["A", "B"]));
    assert!(!diff.is_unchanged());
}

#[test]
fn test_diff_edge_change_only() {
    let diff = NodeDiff::between(&parse("A --> B\nC"), &parse("C --> A\nB"));
    assert!(diff.is_unchanged());
    assert_eq!(diff.retained, ids(&["C", "A", "B"]));
}

#[test]
fn test_diff_from_empty() {
    let diff = NodeDiff::between(&parse(""), &parse("X --> Y"));
    assert_eq!(diff.added, ids(&["X", "Y"]));
    assert!(diff.removed.is_empty());
}
