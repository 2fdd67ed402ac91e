//! Error types for diagram processing.
//!
//! [`MermaidError`] is the rich error used by [`DiagramBuilder`]. The
//! convenience entry points collapse it into the detail-free
//! [`Unrenderable`] marker.
//!
//! [`DiagramBuilder`]: crate::DiagramBuilder

use std::io;

use thiserror::Error;

use mermaid_lite_parser::ParseError;

/// The main error type for diagram operations.
#[derive(Debug, Error)]
pub enum MermaidError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for MermaidError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

/// The source cannot be rendered as a diagram; render it as code instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("diagram source is not renderable")]
pub struct Unrenderable;

impl From<MermaidError> for Unrenderable {
    fn from(_: MermaidError) -> Self {
        Self
    }
}
