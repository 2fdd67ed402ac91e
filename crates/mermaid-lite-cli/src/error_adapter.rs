//! Error adapter for converting [`MermaidError`] to miette diagnostics.
//!
//! Every error variant gets a stable diagnostic code; parse errors also
//! carry a short hint pointing at the supported grammars.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use mermaid_lite::{MermaidError, ParseError};

/// Adapter that renders a [`MermaidError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a MermaidError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            MermaidError::Io(_) => "mermaid_lite::io",
            MermaidError::Parse(err) => match err {
                ParseError::EmptySource => "mermaid_lite::parse::empty_source",
                ParseError::Unrecognized { .. } => "mermaid_lite::parse::unrecognized",
                ParseError::NoNodes => "mermaid_lite::parse::no_nodes",
                ParseError::NoParticipants => "mermaid_lite::parse::no_participants",
                ParseError::NoMessages => "mermaid_lite::parse::no_messages",
            },
            MermaidError::Layout(_) => "mermaid_lite::layout",
            MermaidError::Export(_) => "mermaid_lite::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            MermaidError::Parse(ParseError::Unrecognized { .. }) => {
                "start the diagram with `flowchart`, `graph` or `sequenceDiagram`, \
                 or pass `--fallback` to emit it as a code block"
            }
            MermaidError::Parse(ParseError::NoNodes) => {
                "declare at least one node, for example `A[Start] --> B`"
            }
            MermaidError::Parse(ParseError::NoMessages | ParseError::NoParticipants) => {
                "add at least one message, for example `Alice->>Bob: Hello`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
