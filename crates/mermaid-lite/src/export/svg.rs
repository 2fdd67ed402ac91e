//! SVG export backend.
//!
//! [`Svg`] renders a [`Layout`] into one `<svg>` document: the shared
//! arrowhead marker in `<defs>`, followed by one group per render layer.

mod flowchart;
mod sequence;

use log::debug;
use svg::{self, node::element as svg_element};

use mermaid_lite_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, arrow_marker_definitions},
    geometry::Size,
};

use super::{Error, Exporter};
use crate::layout::Layout;

const ROOT_CLASS: &str = "pn-mermaid";
const ROOT_TAG: &str = "<svg";

/// SVG exporter with optional canvas background.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    background: Option<Color>,
}

impl Svg {
    /// Creates an exporter with a transparent canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the canvas with `color`.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Builds the SVG document for `layout`.
    pub fn render_document(&self, layout: &Layout) -> svg::Document {
        let size = layout.size();

        let mut output = match layout {
            Layout::Flowchart(layout) => self.render_flowchart(layout),
            Layout::Sequence(layout) => self.render_sequence(layout),
        };
        if let Some(background) = self.render_background(size) {
            output.merge(background);
        }

        let mut doc = svg::Document::new()
            .set("class", ROOT_CLASS)
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height())
            .add(arrow_marker_definitions());

        for group in output.render() {
            doc = doc.add(group);
        }
        doc
    }

    fn render_background(&self, size: Size) -> Option<LayeredOutput> {
        let color = self.background.as_ref()?;

        let rect = svg_element::Rectangle::new()
            .set("class", "pn-mermaid-background")
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", color);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
        Some(output)
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout) -> Result<String, Error> {
        let doc = self.render_document(layout);

        let mut buffer = Vec::new();
        svg::write(&mut buffer, &doc)?;
        let markup =
            String::from_utf8(buffer).map_err(|err| Error::Render(format!("invalid UTF-8: {err}")))?;

        // Drop any XML prolog so the markup can be embedded inline
        let start = markup
            .find(ROOT_TAG)
            .ok_or_else(|| Error::Render("document has no <svg> root".to_string()))?;
        debug!(bytes = markup.len() - start; "SVG document written");

        Ok(markup[start..].to_string())
    }
}

#[cfg(test)]
mod tests {
    use mermaid_lite_core::semantic::{Direction, FlowGraph, NodeShape};

    use super::*;
    use crate::layout::flowchart;

    fn layout() -> Layout {
        let mut graph = FlowGraph::new();
        graph.register_node("A", Some("Start"), NodeShape::Square);
        graph.add_edge("A", "B");
        Layout::Flowchart(flowchart::Layout::new(&graph, Direction::TD).unwrap())
    }

    #[test]
    fn test_export_starts_with_root_element() {
        let markup = Svg::new().export_layout(&layout()).unwrap();
        assert!(markup.starts_with("<svg"));
        assert!(markup.trim_end().ends_with("</svg>"));
        assert!(markup.contains(r#"class="pn-mermaid""#));
        assert_eq!(markup.matches("<marker").count(), 1);
    }

    #[test]
    fn test_export_without_background() {
        let markup = Svg::new().export_layout(&layout()).unwrap();
        assert!(!markup.contains("pn-mermaid-background"));
        assert!(!markup.contains(r#"data-layer="background""#));
    }

    #[test]
    fn test_export_with_background() {
        let color = Color::new("#fafafa").unwrap();
        let markup = Svg::new()
            .with_background(Some(color))
            .export_layout(&layout())
            .unwrap();

        assert!(markup.contains("pn-mermaid-background"));
        let background = markup.find(r#"data-layer="background""#).unwrap();
        let content = markup.find(r#"data-layer="content""#).unwrap();
        assert!(background < content);
    }

    #[test]
    fn test_export_layers_in_order() {
        let markup = Svg::new().export_layout(&layout()).unwrap();
        let arrow = markup.find(r#"data-layer="arrow""#).unwrap();
        let content = markup.find(r#"data-layer="content""#).unwrap();
        let text = markup.find(r#"data-layer="text""#).unwrap();
        assert!(arrow < content && content < text);
    }
}
