//! CLI command implementations.

use std::io::Read;
use std::path::Path;

use crate::engine::{frame_at, Frame, NodeDiff};
use crate::graph::{generate_trace, GraphModel};
use crate::parser;
use crate::types::{TraceResult, TraceStep, TraversalMode};

/// Read graph text from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> TraceResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read and parse a graph file.
pub fn load_model(path: &Path) -> TraceResult<GraphModel> {
    let text = read_source(path)?;
    let model = parser::parse(&text);
    log::debug!(
        "{}: {} nodes, {} edges",
        path.display(),
        model.node_count(),
        model.edge_count()
    );
    Ok(model)
}

/// Show the parsed model: nodes, adjacency and root.
pub fn cmd_parse(path: &Path, json: bool) -> TraceResult<()> {
    let model = load_model(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model_json(&model))?);
    } else {
        println!("Nodes: {}", model.node_count());
        println!("Edges: {}", model.edge_count());
        println!("Start: {}", model.start_node().unwrap_or("(none)"));
        for (id, targets) in model.adjacency() {
            if targets.is_empty() {
                println!("  {}", id);
            } else {
                println!("  {} -> {}", id, targets.join(", "));
            }
        }
    }
    Ok(())
}

/// Print the full trace for `mode`.
pub fn cmd_trace(path: &Path, mode: TraversalMode, json: bool, pretty: bool) -> TraceResult<()> {
    let model = load_model(path)?;
    let trace = generate_trace(&model, mode);

    if json {
        let output = serde_json::json!({
            "mode": mode,
            "start": model.start_node(),
            "steps": trace,
        });
        if pretty {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string(&output)?);
        }
    } else if trace.is_empty() {
        println!("Empty trace ({})", mode);
    } else {
        for (i, step) in trace.iter().enumerate() {
            println!("{}", format_step(i, step));
        }
    }
    Ok(())
}

/// Show the replay frame at one position of the trace.
pub fn cmd_replay(
    path: &Path,
    mode: TraversalMode,
    step: usize,
    window: usize,
    json: bool,
) -> TraceResult<()> {
    let model = load_model(path)?;
    let trace = generate_trace(&model, mode);
    let frame = frame_at(&trace, step, window)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print!("{}", format_frame(&frame));
    }
    Ok(())
}

/// Compare the node sets of two versions of a graph file.
pub fn cmd_diff(previous: &Path, current: &Path, json: bool) -> TraceResult<()> {
    let diff = NodeDiff::between(&load_model(previous)?, &load_model(current)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else if diff.is_unchanged() {
        println!("No node changes ({} retained)", diff.retained.len());
    } else {
        for id in &diff.added {
            println!("+ {}", id);
        }
        for id in &diff.removed {
            println!("- {}", id);
        }
        println!("{} retained", diff.retained.len());
    }
    Ok(())
}

/// JSON document for a model, keeping node and adjacency order.
pub fn model_json(model: &GraphModel) -> serde_json::Value {
    let adjacency: Vec<serde_json::Value> = model
        .adjacency()
        .map(|(id, targets)| serde_json::json!({"node": id, "targets": targets}))
        .collect();
    serde_json::json!({
        "nodes": model.node_ids(),
        "adjacency": adjacency,
        "start": model.start_node(),
    })
}

/// One line of a text trace listing.
pub fn format_step(index: usize, step: &TraceStep) -> String {
    let mut line = format!("{:>3}. {}", index + 1, step.message);
    if let Some(action) = &step.action {
        line.push_str(&format!(" ({})", action));
    }
    if !step.newly_discovered.is_empty() {
        line.push_str(&format!(" +[{}]", step.newly_discovered.join(", ")));
    }
    line.push_str(&format!(
        " | {}: [{}] | Visited: [{}]",
        step.frontier_kind,
        step.frontier.join(", "),
        step.visited.join(", ")
    ));
    line
}

/// Multi-line text rendering of a replay frame.
pub fn format_frame(frame: &Frame<'_>) -> String {
    let step = frame.step;
    let mut out = format!("Step {}: {}\n", frame.counter, step.message);
    if let Some(action) = &step.action {
        out.push_str(&format!("Action: {}\n", action));
    }
    if !frame.delta.removed.is_empty() {
        out.push_str(&format!("Removed: {}\n", frame.delta.removed.join(", ")));
    }
    if !frame.delta.added.is_empty() {
        out.push_str(&format!("Added: {}\n", frame.delta.added.join(", ")));
    }
    out.push_str(&format!("Highlight: {}\n", frame.highlighted.join(", ")));
    if step.frontier.is_empty() {
        out.push_str(&format!("{}: (Empty)\n", step.frontier_kind));
    } else {
        out.push_str(&format!(
            "{}: {}\n",
            step.frontier_kind,
            step.frontier.join(", ")
        ));
    }
    out.push_str(&format!("Visited: {}\n", step.visited.join(", ")));
    out.push_str("History:\n");
    let first = frame.index + 1 - frame.history.len();
    for (offset, entry) in frame.history.iter().enumerate() {
        let marker = if first + offset == frame.index { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, first + offset + 1, entry.message));
    }
    out
}
