//! Edge-operator lexer for flowchart lines.
//!
//! Recognised operators, tried in this order at every position:
//! `-->|label|`, `-->`, `-.->`, `==>`, `-- label -->`.

use crate::types::COMMENT_MARKER;

/// Stroke of an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowStyle {
    /// `-->`
    Solid,
    /// `-.->`
    Dotted,
    /// `==>`
    Thick,
}

/// One arrow found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOperator<'a> {
    pub style: ArrowStyle,
    /// Inline label from `-->|label|` or `-- label -->`.
    pub label: Option<&'a str>,
}

impl<'a> EdgeOperator<'a> {
    fn new(style: ArrowStyle, label: Option<&'a str>) -> Self {
        Self {
            style,
            label: label.map(str::trim).filter(|l| !l.is_empty()),
        }
    }
}

/// A line cut at its arrows. `operators[i]` sits between `segments[i]`
/// and `segments[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Trimmed text between arrows; may be empty.
    pub segments: Vec<&'a str>,
    pub operators: Vec<EdgeOperator<'a>>,
}

impl SplitLine<'_> {
    /// True if the line contains at least one arrow.
    pub fn is_edge_line(&self) -> bool {
        !self.operators.is_empty()
    }
}

/// Drop everything from the first comment marker on, then trim.
pub fn strip_comment(line: &str) -> &str {
    let code = match line.find(COMMENT_MARKER) {
        Some(i) => &line[..i],
        None => line,
    };
    code.trim()
}

/// Split a (comment-free) line at every edge operator.
pub fn split_line(line: &str) -> SplitLine<'_> {
    let mut segments = Vec::new();
    let mut operators = Vec::new();
    let mut segment_start = 0;
    let mut pos = 0;

    while pos < line.len() {
        // `get` is None off a char boundary, which can never start an operator.
        match line.get(pos..).and_then(match_operator) {
            Some((op, len)) => {
                segments.push(line[segment_start..pos].trim());
                operators.push(op);
                pos += len;
                segment_start = pos;
            }
            None => pos += 1,
        }
    }
    segments.push(line[segment_start..].trim());

    SplitLine {
        segments,
        operators,
    }
}

/// Match an operator at the start of `rest`, returning it and its byte length.
fn match_operator(rest: &str) -> Option<(EdgeOperator<'_>, usize)> {
    if let Some(after) = rest.strip_prefix("-->") {
        if let Some(end) = after.strip_prefix('|').and_then(|body| body.find('|')) {
            let label = &after[1..1 + end];
            return Some((EdgeOperator::new(ArrowStyle::Solid, Some(label)), 3 + end + 2));
        }
        return Some((EdgeOperator::new(ArrowStyle::Solid, None), 3));
    }
    if rest.starts_with("-.->") {
        return Some((EdgeOperator::new(ArrowStyle::Dotted, None), 4));
    }
    if rest.starts_with("==>") {
        return Some((EdgeOperator::new(ArrowStyle::Thick, None), 3));
    }
    if let Some(after) = rest.strip_prefix("--") {
        if let Some(end) = after.find("-->") {
            let label = &after[..end];
            return Some((EdgeOperator::new(ArrowStyle::Solid, Some(label)), 2 + end + 3));
        }
    }
    None
}
