//! Semantic diagram model types.
//!
//! These are the graphs the parser builds and the layout engines consume.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ split + classify
//! Statements
//!     ↓ token parsers + graph builders
//! Semantic Model (these types)
//!     ↓ layout
//! Positioned Elements
//!     ↓ export
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - [`DiagramSource`], [`DiagramKind`] and flowchart [`Direction`]
//! - [`flowchart`] - [`FlowGraph`], [`FlowNode`], [`FlowEdge`], [`NodeShape`]
//! - [`sequence`] - [`SequenceGraph`], [`Participant`], [`Message`]

pub mod diagram;
pub mod flowchart;
pub mod sequence;

pub use diagram::*;
pub use flowchart::*;
pub use sequence::*;
