//! Arrow lines and the shared arrowhead marker.
//!
//! Every edge and message references the single marker produced by
//! [`arrow_marker_definitions`], so a document carries exactly one
//! `<marker>` regardless of how many arrows it draws.

use svg::node::element as svg_element;

use crate::{
    draw::{LayeredOutput, RenderLayer, SvgNode},
    geometry::Point,
};

/// Element id of the shared arrowhead marker.
pub const ARROW_MARKER_ID: &str = "pn-mermaid-arrow";

const STROKE_COLOR: &str = "#334155";

/// A straight line between two absolute points ending in an arrowhead.
///
/// Unlike box-like drawables an arrow is positioned by its endpoints, so it
/// is rendered through [`ArrowLine::render_to_layers`] rather than
/// [`Drawable`](crate::draw::Drawable).
#[derive(Debug, Clone)]
pub struct ArrowLine {
    start: Point,
    end: Point,
    class: &'static str,
}

impl ArrowLine {
    pub fn new(start: Point, end: Point, class: &'static str) -> Self {
        Self { start, end, class }
    }

    /// Returns the start point
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point, where the arrowhead sits
    pub fn end(&self) -> Point {
        self.end
    }

    /// Renders the line on [`RenderLayer::Arrow`].
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = svg_element::Line::new()
            .set("class", self.class)
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .set("stroke", STROKE_COLOR)
            .set("stroke-width", 1.5)
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})"));

        output.add_to_layer(RenderLayer::Arrow, Box::new(line));
        output
    }
}

/// Returns a `<defs>` element holding the shared arrowhead marker.
pub fn arrow_marker_definitions() -> SvgNode {
    let marker = svg_element::Marker::new()
        .set("id", ARROW_MARKER_ID)
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 7)
        .set("markerHeight", 7)
        .set("orient", "auto-start-reverse")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", STROKE_COLOR),
        );

    Box::new(svg_element::Definitions::new().add(marker))
}
