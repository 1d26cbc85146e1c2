//! Node identifier extraction and keyword filtering.

/// Structural tokens of the description language that never name a node.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "graph",
    "flowchart",
    "TD",
    "TB",
    "BT",
    "LR",
    "RL",
    "subgraph",
    "end",
    "style",
    "linkStyle",
    "classDef",
    "%%",
];

/// Characters allowed in a node identifier: ASCII word characters and `-`.
pub fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whether `token` is a reserved keyword (case-sensitive).
pub fn is_reserved(token: &str) -> bool {
    RESERVED_KEYWORDS.contains(&token)
}

/// Leading identifier run of a trimmed segment, ignoring any shape
/// decoration that follows (`A[..]`, `A((..))`, `A{..}`, `A(..)`).
pub fn leading_token(segment: &str) -> Option<&str> {
    let s = segment.trim();
    let end = s.find(|c: char| !is_id_char(c)).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

/// Node identifier named by `segment`, or `None` if it has no leading
/// identifier or names a keyword.
pub fn extract_id(segment: &str) -> Option<&str> {
    match leading_token(segment) {
        Some(token) if is_reserved(token) => {
            log::trace!("ignoring keyword {:?}", token);
            None
        }
        other => other,
    }
}
