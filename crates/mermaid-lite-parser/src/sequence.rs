//! Sequence diagram token parser and graph builder.
//!
//! Two statement forms are understood:
//!
//! ```text
//! participant <id> [as <label>]      (or `actor`)
//! <id> <op>[+|-] <id> : <text>
//! ```

use log::debug;
use winnow::{
    Parser as _,
    ascii::{Caseless, space0, space1},
    combinator::{alt, opt, preceded},
    error::ModalResult,
    token::{literal, one_of, take_while},
};

use mermaid_lite_core::{
    label::{DEFAULT_MAX_LABEL_CHARS, trim_label},
    semantic::SequenceGraph,
};

use crate::statements::first_word;

const SKIPPED_KEYWORDS: [&str; 13] = [
    "autonumber",
    "activate",
    "deactivate",
    "note",
    "rect",
    "loop",
    "alt",
    "else",
    "end",
    "opt",
    "par",
    "critical",
    "break",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Declaration<'a> {
    pub id: &'a str,
    pub label: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MessageToken<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub text: &'a str,
}

/// Builds a sequence graph from body statements.
pub(crate) fn build_graph(statements: &[&str]) -> SequenceGraph {
    let mut graph = SequenceGraph::new();

    for &statement in statements {
        let keyword = first_word(statement);
        if SKIPPED_KEYWORDS
            .iter()
            .any(|skipped| skipped.eq_ignore_ascii_case(keyword))
        {
            debug!(statement:?; "Skipping unsupported sequence keyword");
            continue;
        }

        if let Some(declaration) = parse_declaration(statement) {
            graph.declare_participant(declaration.id, declaration.label);
        } else if let Some(message) = parse_message(statement) {
            let text = trim_label(message.text, DEFAULT_MAX_LABEL_CHARS);
            graph.add_message(message.from, message.to, &text);
        } else {
            debug!(statement:?; "Dropping unparseable sequence statement");
        }
    }

    graph
}

pub(crate) fn parse_declaration(statement: &str) -> Option<Declaration<'_>> {
    let mut input = statement.trim();
    let declaration = declaration.parse_next(&mut input).ok()?;
    input.is_empty().then_some(declaration)
}

pub(crate) fn parse_message(statement: &str) -> Option<MessageToken<'_>> {
    let mut input = statement.trim();
    let message = message.parse_next(&mut input).ok()?;
    input.is_empty().then_some(message)
}

fn declaration<'i>(input: &mut &'i str) -> ModalResult<Declaration<'i>> {
    alt((literal(Caseless("participant")), literal(Caseless("actor")))).parse_next(input)?;
    space1.parse_next(input)?;
    let id = participant_id.parse_next(input)?;
    let label = opt(preceded(
        (space1, literal(Caseless("as")), space1),
        remainder,
    ))
    .parse_next(input)?;
    space0.parse_next(input)?;

    let label = label.map(str::trim).filter(|label| !label.is_empty());
    Ok(Declaration { id, label })
}

fn message<'i>(input: &mut &'i str) -> ModalResult<MessageToken<'i>> {
    let from = participant_id.parse_next(input)?;
    space0.parse_next(input)?;
    message_operator.parse_next(input)?;
    // Activation shorthand, accepted and ignored
    opt(one_of(['+', '-'])).parse_next(input)?;
    space0.parse_next(input)?;
    let to = participant_id.parse_next(input)?;
    space0.parse_next(input)?;
    ':'.parse_next(input)?;
    let text = remainder.parse_next(input)?;

    Ok(MessageToken { from, to, text })
}

/// Message operators, longest first so that `-->>` is not read as `-->`.
fn message_operator<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    // winnow's `alt` takes at most 9 alternatives; nest to keep the same order
    alt((
        alt(("<<--", "-->>", "<->", "->>", "-->", "==>", "<--", "->", "=>")),
        "<-",
    ))
    .parse_next(input)
}

fn participant_id<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, '-' | '<' | '>' | '=' | ':' | '+')
    })
    .parse_next(input)
}

fn remainder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |_: char| true).parse_next(input)
}
