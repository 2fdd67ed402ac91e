//! Lifeline drawable for sequence diagrams.
//!
//! A lifeline stores only its height. It renders as a vertical dashed line
//! centered on the given position, so callers place it through
//! [`PositionedDrawable`](crate::draw::PositionedDrawable) using the midpoint
//! between its top and bottom ends.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

const STROKE_WIDTH: f32 = 1.0;

/// A vertical participant timeline.
#[derive(Debug, Clone)]
pub struct Lifeline {
    height: f32,
}

impl Lifeline {
    /// Creates a lifeline of the given height.
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Drawable for Lifeline {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let half = self.height / 2.0;
        let line = svg_element::Line::new()
            .set("class", "pn-mermaid-lifeline")
            .set("x1", position.x())
            .set("y1", position.y() - half)
            .set("x2", position.x())
            .set("y2", position.y() + half)
            .set("stroke", "#94a3b8")
            .set("stroke-width", STROKE_WIDTH)
            .set("stroke-dasharray", "4 4");

        output.add_to_layer(RenderLayer::Lifeline, Box::new(line));
        output
    }

    fn size(&self) -> Size {
        Size::new(STROKE_WIDTH, self.height)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_lifeline_size() {
        let lifeline = Lifeline::new(200.0);
        assert_approx_eq!(f32, lifeline.size().height(), 200.0);
        assert_approx_eq!(f32, lifeline.size().width(), STROKE_WIDTH);
    }

    #[test]
    fn test_lifeline_renders_vertical_line() {
        let lifeline = Lifeline::new(100.0);
        let output = lifeline.render_to_layers(Point::new(85.0, 104.0));
        assert_eq!(output.count_on(RenderLayer::Lifeline), 1);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains(r#"y1="54""#));
        assert!(svg.contains(r#"y2="154""#));
        assert!(svg.contains("pn-mermaid-lifeline"));
    }
}
