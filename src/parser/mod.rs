//! Tolerant parser for flowchart-style graph text.
//!
//! Never fails: lines it cannot make sense of are skipped, so transiently
//! invalid text being edited still yields a usable (possibly empty) model.

pub mod ident;
pub mod lexer;

pub use ident::{extract_id, is_reserved, RESERVED_KEYWORDS};
pub use lexer::{split_line, strip_comment, ArrowStyle, EdgeOperator, SplitLine};

use crate::graph::{GraphBuilder, GraphModel};

/// Parse graph text into a [`GraphModel`].
///
/// Every adjacent pair of segments on an arrow line is an edge; a line
/// without arrows declares a single node.
pub fn parse(text: &str) -> GraphModel {
    let mut builder = GraphBuilder::new();
    for (n, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        parse_line(&mut builder, n + 1, line);
    }
    builder.build()
}

fn parse_line(builder: &mut GraphBuilder, line_no: usize, line: &str) {
    let split = split_line(line);
    if !split.is_edge_line() {
        match extract_id(line) {
            Some(id) => {
                builder.add_node(id);
            }
            None => log::trace!("line {}: no node in {:?}", line_no, line),
        }
        return;
    }

    for pair in split.segments.windows(2) {
        match (extract_id(pair[0]), extract_id(pair[1])) {
            (Some(source), Some(target)) => {
                builder.add_edge(source, target);
            }
            _ => log::trace!(
                "line {}: skipped edge {:?} -> {:?}",
                line_no,
                pair[0],
                pair[1]
            ),
        }
    }
}
