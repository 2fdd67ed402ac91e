//! Export of laid-out diagrams.
//!
//! This module provides the [`Exporter`] trait that turns a [`Layout`] into
//! output markup. It is the last stage of the pipeline.
//!
//! # Available Backends
//!
//! - [`svg`] - self-contained `<svg>` markup via [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`MermaidError::Export`] at the crate boundary.
//!
//! [`MermaidError::Export`]: crate::MermaidError::Export

/// SVG export backend.
pub mod svg;

use crate::layout::Layout;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&self, layout: &Layout) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
