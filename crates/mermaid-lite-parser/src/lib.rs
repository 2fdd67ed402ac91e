//! # mermaid-lite Parser
//!
//! Best-effort parser for the flowchart and sequence subset of the mermaid
//! diagram syntax. Unknown statements are skipped rather than rejected; only
//! whole-diagram failures surface as [`ParseError`].
//!
//! ## Usage
//!
//! ```
//! # use mermaid_lite_parser::{parse, ParseError};
//! # use mermaid_lite_core::semantic::DiagramSource;
//! fn main() -> Result<(), ParseError> {
//!     let source = "flowchart LR\n  A[Start] --> B{Ready?}\n  B -->|yes| C";
//!
//!     let DiagramSource::Flowchart { graph, .. } = parse(source)? else {
//!         unreachable!("a flowchart directive yields a flowchart");
//!     };
//!     assert_eq!(graph.node_count(), 3);
//!     Ok(())
//! }
//! ```

mod classify;
mod error;
mod flowchart;
mod sequence;
mod statements;

pub use error::{ParseError, Result};

use log::{debug, info, trace};

use mermaid_lite_core::{label::trim_label, semantic::DiagramSource};

use classify::Header;

const HEADER_PREVIEW_CHARS: usize = 32;

/// Parse diagram source text into a tagged graph model.
///
/// The pipeline is:
///
/// 1. **Split** - lines, then `;`, dropping blanks and `%%` comments
/// 2. **Classify** - pick the grammar from the opening statement
/// 3. **Build** - parse statements into a [`FlowGraph`] or [`SequenceGraph`]
///
/// # Errors
///
/// Returns [`ParseError::EmptySource`] for blank or comment-only input,
/// [`ParseError::Unrecognized`] when neither grammar applies, and
/// [`ParseError::NoNodes`], [`ParseError::NoParticipants`] or
/// [`ParseError::NoMessages`] when parsing produced an empty graph.
///
/// [`FlowGraph`]: mermaid_lite_core::semantic::FlowGraph
/// [`SequenceGraph`]: mermaid_lite_core::semantic::SequenceGraph
pub fn parse(source: &str) -> Result<DiagramSource> {
    let statements = statements::split_statements(source);
    debug!(statement_count = statements.len(); "Split diagram source");

    let Some(first) = statements.first() else {
        return Err(ParseError::EmptySource);
    };

    let Some(header) = classify::classify(&statements) else {
        return Err(ParseError::Unrecognized {
            header: trim_label(first, HEADER_PREVIEW_CHARS),
        });
    };

    let diagram = match header {
        Header::Sequence => {
            let graph = sequence::build_graph(&statements[1..]);
            if graph.participant_count() == 0 {
                return Err(ParseError::NoParticipants);
            }
            if graph.messages().is_empty() {
                return Err(ParseError::NoMessages);
            }
            info!(
                participants = graph.participant_count(),
                messages = graph.messages().len();
                "Parsed sequence diagram"
            );
            DiagramSource::Sequence(graph)
        }
        Header::Flowchart {
            direction,
            has_directive,
        } => {
            let body = if has_directive {
                &statements[1..]
            } else {
                &statements[..]
            };
            let graph = flowchart::build_graph(body);
            if graph.is_empty() {
                return Err(ParseError::NoNodes);
            }
            info!(
                nodes = graph.node_count(),
                edges = graph.edges().len(),
                direction:%;
                "Parsed flowchart"
            );
            DiagramSource::Flowchart { graph, direction }
        }
    };

    trace!(diagram:?; "Parsed diagram model");
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use mermaid_lite_core::semantic::{DiagramKind, Direction};

    use super::*;

    #[test]
    fn test_parse_empty_inputs() {
        assert_eq!(parse(""), Err(ParseError::EmptySource));
        assert_eq!(parse("   \n\t  "), Err(ParseError::EmptySource));
        assert_eq!(parse("%% only\n%% comments"), Err(ParseError::EmptySource));
    }

    #[test]
    fn test_parse_unrecognized() {
        let err = parse("classDiagram\n  Animal <|-- Duck").unwrap_err();
        assert!(matches!(err, ParseError::Unrecognized { .. }));
    }

    #[test]
    fn test_parse_unrecognized_plain_text() {
        let err = parse("just some words").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unrecognized {
                header: "just some words".to_string()
            }
        );
    }

    #[test]
    fn test_parse_flowchart_with_direction() {
        let source = parse("flowchart RL; A --> B").unwrap();
        let DiagramSource::Flowchart { graph, direction } = source else {
            panic!("expected flowchart");
        };
        assert_eq!(direction, Direction::RL);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_parse_flowchart_fallback_keeps_first_statement() {
        let source = parse("A --> B\nB --> C").unwrap();
        let DiagramSource::Flowchart { graph, direction } = source else {
            panic!("expected flowchart");
        };
        assert_eq!(direction, Direction::TD);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn test_parse_flowchart_without_edges_is_valid() {
        let source = parse("graph TD\nA\nB\nC").unwrap();
        assert_eq!(source.kind(), DiagramKind::Flowchart);
    }

    #[test]
    fn test_parse_flowchart_no_nodes() {
        assert_eq!(
            parse("graph TD\nstyle A fill:#fff\n???"),
            Err(ParseError::NoNodes)
        );
        assert_eq!(parse("flowchart LR"), Err(ParseError::NoNodes));
    }

    #[test]
    fn test_parse_sequence() {
        let source = parse("sequenceDiagram\nA->>B: one\nB-->>A: two").unwrap();
        let DiagramSource::Sequence(graph) = source else {
            panic!("expected sequence");
        };
        assert_eq!(graph.participant_count(), 2);
        assert_eq!(graph.messages().len(), 2);
    }

    #[test]
    fn test_parse_sequence_empty_results() {
        assert_eq!(parse("sequenceDiagram"), Err(ParseError::NoParticipants));
        assert_eq!(
            parse("sequenceDiagram\nparticipant A\nparticipant B"),
            Err(ParseError::NoMessages)
        );
    }
}
