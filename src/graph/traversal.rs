//! Recorded traversals (BFS, DFS, linear enumeration).
//!
//! Each function replays its algorithm over a [`GraphModel`] and returns one
//! [`TraceStep`] per observable event, in emission order. A model without
//! a root yields an empty trace.

use std::collections::{HashSet, VecDeque};

use crate::parser;
use crate::types::{FrontierKind, StepKind, TraceStep, TraversalMode};

use super::GraphModel;

/// Generate the trace for `mode`.
pub fn generate_trace(graph: &GraphModel, mode: TraversalMode) -> Vec<TraceStep> {
    let steps = match mode {
        TraversalMode::BreadthFirst => bfs_trace(graph),
        TraversalMode::DepthFirst => dfs_trace(graph),
        TraversalMode::Linear => linear_trace(graph),
    };
    log::debug!("{} trace: {} steps", mode, steps.len());
    steps
}

/// Parse `text` and generate the trace for `mode` in one call.
pub fn trace_text(text: &str, mode: TraversalMode) -> Vec<TraceStep> {
    generate_trace(&parser::parse(text), mode)
}

/// Breadth-first trace with a FIFO frontier.
///
/// A node is appended at most once while queued; visited nodes are
/// discarded silently at dequeue time.
pub fn bfs_trace(graph: &GraphModel) -> Vec<TraceStep> {
    let Some(start) = graph.start_node() else {
        return Vec::new();
    };

    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    let mut queued: HashSet<&str> = HashSet::from([start]);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<&str> = Vec::new();
    let mut steps = vec![start_step(start, FrontierKind::Queue)];

    while let Some(node) = queue.pop_front() {
        queued.remove(node);
        if !visited.insert(node) {
            continue;
        }
        visited_order.push(node);

        let mut discovered = Vec::new();
        for next in graph.neighbors(node) {
            let next = next.as_str();
            if visited.contains(next) || queued.contains(next) {
                continue;
            }
            queue.push_back(next);
            queued.insert(next);
            discovered.push(next);
        }

        steps.push(visit_step(
            node,
            format!("Dequeued {}", node),
            &discovered,
            &queue,
            FrontierKind::Queue,
            &visited_order,
        ));
    }

    steps
}

/// Depth-first trace with a LIFO frontier.
///
/// Successors are pushed in reverse adjacency order so they pop in
/// adjacency order. A node may sit on the stack more than once; repeats
/// are discarded silently when popped.
pub fn dfs_trace(graph: &GraphModel) -> Vec<TraceStep> {
    let Some(start) = graph.start_node() else {
        return Vec::new();
    };

    let mut stack: Vec<&str> = vec![start];
    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<&str> = Vec::new();
    let mut steps = vec![start_step(start, FrontierKind::Stack)];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        visited_order.push(node);

        let pushed: Vec<&str> = graph
            .neighbors(node)
            .iter()
            .rev()
            .map(String::as_str)
            .filter(|next| !visited.contains(next))
            .collect();
        stack.extend(pushed.iter().copied());

        steps.push(visit_step(
            node,
            format!("Popped {}", node),
            &pushed,
            &stack,
            FrontierKind::Stack,
            &visited_order,
        ));
    }

    steps
}

/// One informational step per node in declaration order. Edges are ignored.
pub fn linear_trace(graph: &GraphModel) -> Vec<TraceStep> {
    graph
        .node_ids()
        .iter()
        .map(|id| {
            TraceStep::info(
                id,
                format!("Processing Node: {}", id),
                Vec::new(),
                FrontierKind::Linear,
            )
        })
        .collect()
}

fn start_step(start: &str, frontier_kind: FrontierKind) -> TraceStep {
    TraceStep::info(
        start,
        format!("Start at Root [{}]", start),
        vec![start.to_string()],
        frontier_kind,
    )
}

fn visit_step<S: AsRef<str>>(
    node: &str,
    action: String,
    discovered: &[&str],
    frontier: impl IntoIterator<Item = S>,
    frontier_kind: FrontierKind,
    visited: &[&str],
) -> TraceStep {
    TraceStep {
        node_id: node.to_string(),
        message: format!("Visited {}", node),
        kind: StepKind::Visit,
        action: Some(action),
        newly_discovered: owned_ids(discovered),
        frontier: owned_ids(frontier),
        frontier_kind,
        visited: owned_ids(visited),
    }
}

fn owned_ids<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Vec<String> {
    ids.into_iter().map(|id| id.as_ref().to_string()).collect()
}
