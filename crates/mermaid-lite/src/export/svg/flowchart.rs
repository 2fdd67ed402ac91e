//! SVG rendering for flowcharts.

use log::trace;

use mermaid_lite_core::draw::LayeredOutput;

use super::Svg;
use crate::layout::flowchart;

impl Svg {
    pub fn render_flowchart(&self, layout: &flowchart::Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for node in layout.nodes() {
            trace!(id = node.id(), position:? = node.position(); "Rendering node");
            output.merge(node.drawable().render_to_layers());
        }
        for edge in layout.edges() {
            output.merge(edge.render_to_layers());
        }

        output
    }
}
