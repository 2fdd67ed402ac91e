//! Layout engines for positioning diagram elements.
//!
//! This module turns a parsed [`DiagramSource`] into positioned drawables
//! with absolute coordinates. Both engines are fixed-geometry and
//! deterministic: the same graph always produces the same layout.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! DiagramSource
//!     ↓ layout (this module)
//! Layout
//!     ↓ export
//! SVG markup
//! ```
//!
//! # Submodules
//!
//! - [`flowchart`] - square-ish grid placement of flow nodes
//! - [`sequence`] - participant columns with one message row per message

pub mod flowchart;
mod geometry;
pub mod sequence;

use log::info;

use mermaid_lite_core::{geometry::Size, semantic::DiagramSource};

use crate::error::MermaidError;

/// A laid-out diagram of either kind.
#[derive(Debug, Clone)]
pub enum Layout {
    Flowchart(flowchart::Layout),
    Sequence(sequence::Layout),
}

impl Layout {
    /// Lays out a parsed diagram with the engine matching its kind.
    ///
    /// # Errors
    ///
    /// Returns [`MermaidError::Layout`] when an edge or message refers to an
    /// element missing from its graph.
    pub fn from_source(source: &DiagramSource) -> Result<Self, MermaidError> {
        let layout = match source {
            DiagramSource::Flowchart { graph, direction } => {
                Self::Flowchart(flowchart::Layout::new(graph, *direction)?)
            }
            DiagramSource::Sequence(graph) => Self::Sequence(sequence::Layout::new(graph)?),
        };

        let size = layout.size();
        info!(
            kind:% = source.kind(),
            width = size.width(),
            height = size.height();
            "Layout calculated"
        );
        Ok(layout)
    }

    /// Returns the canvas size of the layout.
    pub fn size(&self) -> Size {
        match self {
            Self::Flowchart(layout) => layout.size(),
            Self::Sequence(layout) => layout.size(),
        }
    }
}
