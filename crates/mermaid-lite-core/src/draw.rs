//! Drawable Components for Diagram Rendering
//!
//! All drawable components implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to layered SVG output and reporting size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation. Positions passed to [`Drawable::render_to_layers`] are
//! the *center* of the drawable.
mod arrow;
mod layer;
mod lifeline;
mod node_box;
mod positioned;
mod text;

pub use arrow::{ARROW_MARKER_ID, ArrowLine, arrow_marker_definitions};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use lifeline::Lifeline;
pub use node_box::NodeBox;
pub use positioned::PositionedDrawable;
pub use text::{LINE_HEIGHT, Text};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    ///
    /// Simple drawables emit to a single layer; composite ones (a box with a
    /// label) emit to several so that z-ordering is resolved globally.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
