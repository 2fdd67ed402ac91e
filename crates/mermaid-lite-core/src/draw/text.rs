//! Multi-line label text.
//!
//! [`Text`] renders a `<text>` element holding one `<tspan>` per line,
//! vertically centered on the drawable's position. Line content is
//! XML-escaped here, so callers pass raw user text.

use svg::node::{Blob, element as svg_element};

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    label::escape_xml,
};

/// Vertical distance between consecutive label lines.
pub const LINE_HEIGHT: f32 = 16.0;

const FONT_SIZE: f32 = 13.0;
// Rough advance width used only for size estimates
const CHAR_WIDTH: f32 = 7.0;

/// A renderable block of text lines with a CSS class.
#[derive(Debug, Clone)]
pub struct Text {
    lines: Vec<String>,
    class: &'static str,
}

impl Text {
    /// Creates a text block from already wrapped lines.
    pub fn new(lines: Vec<String>, class: &'static str) -> Self {
        Self { lines, class }
    }

    /// Creates a single-line text block.
    pub fn single_line(line: impl Into<String>, class: &'static str) -> Self {
        Self::new(vec![line.into()], class)
    }

    /// Returns the lines of this text block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.is_empty() {
            return output;
        }

        let first_line_y = position.y() - (self.lines.len() - 1) as f32 * LINE_HEIGHT / 2.0;

        let mut rendered = svg_element::Text::new("")
            .set("class", self.class)
            .set("x", position.x())
            .set("y", first_line_y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", FONT_SIZE);

        for (index, line) in self.lines.iter().enumerate() {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("y", first_line_y + index as f32 * LINE_HEIGHT)
                .add(Blob::new(escape_xml(line)));
            rendered = rendered.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }

    fn size(&self) -> Size {
        let longest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size::new(
            longest as f32 * CHAR_WIDTH,
            self.lines.len() as f32 * LINE_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn render(text: &Text, position: Point) -> String {
        text.render_to_layers(position)
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_text_renders_one_tspan_per_line() {
        let text = Text::new(
            vec!["first".to_string(), "second".to_string(), "third".to_string()],
            "pn-mermaid-label",
        );
        let svg = render(&text, Point::new(100.0, 50.0));

        assert_eq!(svg.matches("<tspan").count(), 3);
        assert!(svg.contains("pn-mermaid-label"));
        assert!(svg.contains("second"));
    }

    #[test]
    fn test_text_escapes_content() {
        let text = Text::single_line("<script>alert('x')</script>", "pn-mermaid-label");
        let svg = render(&text, Point::new(0.0, 0.0));

        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_text_empty_renders_nothing() {
        let text = Text::single_line("", "pn-mermaid-message-label");
        assert!(text.is_empty());
        assert!(text.render_to_layers(Point::default()).is_empty());
    }

    #[test]
    fn test_text_size_grows_with_lines() {
        let one = Text::single_line("abc", "c");
        let two = Text::new(vec!["abc".to_string(), "abcdef".to_string()], "c");

        assert_approx_eq!(f32, one.size().height(), LINE_HEIGHT);
        assert_approx_eq!(f32, two.size().height(), 2.0 * LINE_HEIGHT);
        assert!(two.size().width() > one.size().width());
    }
}
