//! SVG rendering for sequence diagrams.

use log::trace;

use mermaid_lite_core::draw::LayeredOutput;

use super::Svg;
use crate::layout::sequence;

impl Svg {
    pub fn render_sequence(&self, layout: &sequence::Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for participant in layout.participants() {
            output.merge(self.render_participant(participant));
        }
        for message in layout.messages() {
            output.merge(self.render_message(message));
        }

        output
    }

    fn render_participant(&self, participant: &sequence::Participant) -> LayeredOutput {
        trace!(id = participant.id(); "Rendering participant");
        let mut output = participant.header().render_to_layers();
        output.merge(participant.lifeline().render_to_layers());
        output
    }

    fn render_message(&self, message: &sequence::Message) -> LayeredOutput {
        trace!(y = message.y_position(); "Rendering message");
        let mut output = message.arrow().render_to_layers();
        if let Some(label) = message.label() {
            output.merge(label.render_to_layers());
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use mermaid_lite_core::{draw::RenderLayer, semantic::SequenceGraph};

    use super::*;

    #[test]
    fn test_render_sequence_layers() {
        let mut graph = SequenceGraph::new();
        graph.add_message("A", "B", "one");
        graph.add_message("B", "A", "");
        let layout = sequence::Layout::new(&graph).unwrap();

        let output = Svg::new().render_sequence(&layout);
        assert_eq!(output.count_on(RenderLayer::Content), 2);
        assert_eq!(output.count_on(RenderLayer::Lifeline), 2);
        assert_eq!(output.count_on(RenderLayer::Arrow), 2);
        // Two participant labels and one message label
        assert_eq!(output.count_on(RenderLayer::Text), 3);
    }
}
