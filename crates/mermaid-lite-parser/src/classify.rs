//! Diagram classification from the opening statement.

use mermaid_lite_core::semantic::Direction;

use crate::{flowchart::find_edge_operator, statements::first_word};

/// Headers of mermaid diagram types that are recognized but not rendered.
/// They are rejected before the edge-operator fallback gets a chance.
const UNSUPPORTED_HEADERS: [&str; 14] = [
    "classdiagram",
    "statediagram",
    "erdiagram",
    "gantt",
    "pie",
    "journey",
    "gitgraph",
    "mindmap",
    "timeline",
    "quadrantchart",
    "requirementdiagram",
    "sankey",
    "xychart",
    "c4context",
];

/// What the opening statement says about the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Header {
    /// `sequenceDiagram`; the first statement is a directive.
    Sequence,
    /// `flowchart`/`graph` directive, or the edge-operator fallback, in
    /// which case `has_directive` is `false` and the first statement is
    /// content.
    Flowchart {
        direction: Direction,
        has_directive: bool,
    },
}

/// Classifies a non-empty statement list, or returns `None` when neither
/// grammar applies.
///
/// Stricter than a bare edge-operator fallback: a body opened by one of
/// [`UNSUPPORTED_HEADERS`] is rejected even when it contains `-->`.
pub(crate) fn classify(statements: &[&str]) -> Option<Header> {
    let first = statements.first()?;
    let lowered = first.to_ascii_lowercase();

    if lowered.starts_with("sequencediagram") {
        return Some(Header::Sequence);
    }

    let mut words = lowered.split_whitespace();
    if matches!(words.next(), Some("flowchart" | "graph")) {
        let direction = words.next().map(Direction::from_token).unwrap_or_default();
        return Some(Header::Flowchart {
            direction,
            has_directive: true,
        });
    }

    let kind = first_word(&lowered).split('-').next().unwrap_or("");
    if UNSUPPORTED_HEADERS.contains(&kind) {
        return None;
    }

    statements
        .iter()
        .any(|statement| find_edge_operator(statement).is_some())
        .then_some(Header::Flowchart {
            direction: Direction::TD,
            has_directive: false,
        })
}
