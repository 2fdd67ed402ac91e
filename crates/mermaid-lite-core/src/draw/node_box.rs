//! Labeled rectangle used for flowchart nodes and participant headers.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, Text},
    geometry::{Point, Size},
};

/// A rectangle with an optional centered label.
///
/// The rectangle goes to [`RenderLayer::Content`], the label to
/// [`RenderLayer::Text`].
#[derive(Debug, Clone)]
pub struct NodeBox {
    size: Size,
    class: &'static str,
    corner_radius: f32,
    label: Option<Text>,
}

impl NodeBox {
    /// Creates an unlabeled box with square corners.
    pub fn new(size: Size, class: &'static str) -> Self {
        Self {
            size,
            class,
            corner_radius: 0.0,
            label: None,
        }
    }

    /// Sets the corner radius (builder style).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Attaches a label (builder style).
    pub fn with_label(mut self, label: Text) -> Self {
        self.label = Some(label);
        self
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&Text> {
        self.label.as_ref()
    }
}

impl Drawable for NodeBox {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let top_left = position.to_bounds(self.size).min_point();

        let rect = svg_element::Rectangle::new()
            .set("class", self.class)
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.corner_radius)
            .set("fill", "white")
            .set("stroke", "#334155")
            .set("stroke-width", 1.5);
        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        if let Some(label) = &self.label {
            output.merge(label.render_to_layers(position));
        }

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
