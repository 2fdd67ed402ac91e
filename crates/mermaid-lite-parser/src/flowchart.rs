//! Flowchart token parser and graph builder.
//!
//! A statement is either an edge (`left <op> right`) or a lone node token.
//! Node tokens are matched against five shapes, tried in order:
//!
//! ```text
//! id((label))   circle
//! id[label]     square
//! id(label)     round
//! id{label}     rhombus
//! id            bare
//! ```
//!
//! Bracket bodies are greedy: `A[f[x]]` yields the label `f[x]`.

use log::debug;
use winnow::{
    Parser as _,
    combinator::{alt, eof, preceded},
    error::{ContextError, ErrMode, ModalResult},
    token::take_while,
};

use mermaid_lite_core::semantic::{FlowGraph, NodeShape};

use crate::statements::first_word;

/// Edge operators in precedence order. At a given position the first
/// operator in this list that matches wins.
pub(crate) const EDGE_OPERATORS: [&str; 8] =
    ["<-->", "-.->", "-->", "==>", "---", "<--", "->", "<-"];

const SKIPPED_KEYWORDS: [&str; 7] = [
    "subgraph",
    "end",
    "style",
    "classDef",
    "class",
    "linkStyle",
    "click",
];

/// A parsed node token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeToken<'a> {
    pub id: &'a str,
    pub label: Option<&'a str>,
    pub shape: NodeShape,
}

/// Location of an edge operator inside a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeMatch {
    pub start: usize,
    pub operator: &'static str,
}

impl EdgeMatch {
    fn end(self) -> usize {
        self.start + self.operator.len()
    }
}

/// Finds the leftmost edge operator; ties at one position go to the
/// operator listed first in [`EDGE_OPERATORS`].
pub(crate) fn find_edge_operator(statement: &str) -> Option<EdgeMatch> {
    statement.char_indices().find_map(|(start, _)| {
        let tail = &statement[start..];
        EDGE_OPERATORS
            .iter()
            .find(|operator| tail.starts_with(**operator))
            .map(|operator| EdgeMatch { start, operator })
    })
}

/// Builds a flowchart graph from body statements.
///
/// Unparseable statements and skipped keywords are dropped.
pub(crate) fn build_graph(statements: &[&str]) -> FlowGraph {
    let mut graph = FlowGraph::new();

    for &statement in statements {
        if SKIPPED_KEYWORDS.contains(&first_word(statement)) {
            debug!(statement:?; "Skipping unsupported flowchart keyword");
            continue;
        }

        match find_edge_operator(statement) {
            Some(edge) => {
                let left = strip_edge_label_suffix(&statement[..edge.start]);
                let right = strip_edge_label_prefix(&statement[edge.end()..]);

                let (Some(from), Some(to)) = (parse_node_token(left), parse_node_token(right))
                else {
                    debug!(statement:?; "Dropping unparseable flowchart edge");
                    continue;
                };

                register(&mut graph, from);
                register(&mut graph, to);
                graph.add_edge(from.id, to.id);
            }
            None => match parse_node_token(statement) {
                Some(node) => register(&mut graph, node),
                None => debug!(statement:?; "Dropping unparseable flowchart statement"),
            },
        }
    }

    graph
}

fn register(graph: &mut FlowGraph, node: NodeToken<'_>) {
    graph.register_node(node.id, node.label, node.shape);
}

/// Parses a complete node token, or returns `None` if any input remains.
pub(crate) fn parse_node_token(token: &str) -> Option<NodeToken<'_>> {
    let mut input = token.trim();
    let node = node_token.parse_next(&mut input).ok()?;
    input.is_empty().then_some(node)
}

fn node_token<'i>(input: &mut &'i str) -> ModalResult<NodeToken<'i>> {
    let id = node_id.parse_next(input)?;
    let (label, shape) = alt((
        enclosed("((", "))").map(|label| (clean_label(label), NodeShape::Circle)),
        enclosed("[", "]").map(|label| (clean_label(label), NodeShape::Square)),
        enclosed("(", ")").map(|label| (clean_label(label), NodeShape::Round)),
        enclosed("{", "}").map(|label| (clean_label(label), NodeShape::Rhombus)),
        eof.value((None, NodeShape::Bare)),
    ))
    .parse_next(input)?;

    Ok(NodeToken { id, label, shape })
}

fn node_id<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '-').parse_next(input)
}

/// Matches `open`, then takes the remaining input up to a trailing `close`.
fn enclosed<'i>(
    open: &'static str,
    close: &'static str,
) -> impl winnow::Parser<&'i str, &'i str, ErrMode<ContextError>> {
    preceded(open, take_while(0.., |_: char| true))
        .verify_map(move |body: &'i str| body.strip_suffix(close))
}

/// Trims a label and strips one pair of surrounding quotes. Empty labels
/// become `None`.
fn clean_label(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(['"', '\'']).unwrap_or(unquoted).trim();
    (!unquoted.is_empty()).then_some(unquoted)
}

/// `A|yes|` -> `A`
fn strip_edge_label_suffix(endpoint: &str) -> &str {
    let trimmed = endpoint.trim_end();
    trimmed
        .strip_suffix('|')
        .and_then(|inner| inner.rfind('|').map(|open| &inner[..open]))
        .unwrap_or(trimmed)
}

/// `|yes| B` -> ` B`
fn strip_edge_label_prefix(endpoint: &str) -> &str {
    let trimmed = endpoint.trim_start();
    trimmed
        .strip_prefix('|')
        .and_then(|inner| inner.find('|').map(|close| &inner[close + 1..]))
        .unwrap_or(trimmed)
}
