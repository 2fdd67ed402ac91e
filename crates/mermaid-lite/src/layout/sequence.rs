//! Lifeline layout for sequence diagrams.
//!
//! Participants occupy fixed-width columns from left to right. Every message
//! gets its own row below the header band, in message order.

use log::debug;

use mermaid_lite_core::{
    draw::{ArrowLine, Lifeline, NodeBox, PositionedDrawable, Text},
    geometry::{Point, Size},
    label::trim_label,
    semantic::{self, SequenceGraph},
};

use crate::error::MermaidError;

/// Width of one participant column.
pub const COLUMN_WIDTH: f32 = 170.0;
/// Size of a participant header box.
pub const HEADER_SIZE: Size = Size::new(120.0, 34.0);
/// Outer canvas padding.
pub const PADDING: f32 = 20.0;
/// Space between the header band and the first message row.
pub const HEADER_GAP: f32 = 24.0;
/// Height of one message row.
pub const ROW_HEIGHT: f32 = 36.0;
/// Space below the last message row.
pub const BOTTOM_MARGIN: f32 = 28.0;

const SELF_MESSAGE_WIDTH: f32 = 40.0;
const MESSAGE_LABEL_OFFSET: f32 = 9.0;
const PARTICIPANT_LABEL_CHARS: usize = 18;

const PARTICIPANT_CLASS: &str = "pn-mermaid-participant";
const PARTICIPANT_LABEL_CLASS: &str = "pn-mermaid-label";
const MESSAGE_CLASS: &str = "pn-mermaid-message";
const MESSAGE_LABEL_CLASS: &str = "pn-mermaid-message-label";

/// A participant header box with the lifeline below it.
#[derive(Debug, Clone)]
pub struct Participant {
    id: String,
    header: PositionedDrawable<NodeBox>,
    lifeline: PositionedDrawable<Lifeline>,
}

impl Participant {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Borrow the positioned header box.
    pub fn header(&self) -> &PositionedDrawable<NodeBox> {
        &self.header
    }

    /// Borrow the positioned lifeline drawable.
    pub fn lifeline(&self) -> &PositionedDrawable<Lifeline> {
        &self.lifeline
    }
}

/// A message arrow at a fixed row, with its optional label.
#[derive(Debug, Clone)]
pub struct Message {
    y_position: f32,
    arrow: ArrowLine,
    label: Option<PositionedDrawable<Text>>,
}

impl Message {
    /// The y-coordinate of the message row
    pub fn y_position(&self) -> f32 {
        self.y_position
    }

    pub fn arrow(&self) -> &ArrowLine {
        &self.arrow
    }

    pub fn label(&self) -> Option<&PositionedDrawable<Text>> {
        self.label.as_ref()
    }
}

/// A positioned sequence diagram.
#[derive(Debug, Clone)]
pub struct Layout {
    participants: Vec<Participant>,
    messages: Vec<Message>,
    size: Size,
}

impl Layout {
    /// Places participants in columns and messages in rows.
    ///
    /// # Errors
    ///
    /// Returns [`MermaidError::Layout`] if a message refers to an unknown
    /// participant.
    pub fn new(graph: &SequenceGraph) -> Result<Self, MermaidError> {
        let size = canvas_size(graph.participant_count(), graph.messages().len());
        let lifeline_top = PADDING + HEADER_SIZE.height();
        let lifeline_bottom = size.height();
        debug!(
            width = size.width(),
            height = size.height();
            "Sequence canvas"
        );

        let participants = graph
            .participants()
            .enumerate()
            .map(|(index, participant)| {
                let center_x = column_center(index);
                let header = NodeBox::new(HEADER_SIZE, PARTICIPANT_CLASS).with_label(
                    Text::single_line(
                        trim_label(participant.label(), PARTICIPANT_LABEL_CHARS),
                        PARTICIPANT_LABEL_CLASS,
                    ),
                );
                let lifeline = Lifeline::new(lifeline_bottom - lifeline_top);

                Participant {
                    id: participant.id().to_string(),
                    header: PositionedDrawable::new(header)
                        .with_position(Point::new(center_x, PADDING + HEADER_SIZE.height() / 2.0)),
                    lifeline: PositionedDrawable::new(lifeline).with_position(Point::new(
                        center_x,
                        (lifeline_top + lifeline_bottom) / 2.0,
                    )),
                }
            })
            .collect();

        let messages = graph
            .messages()
            .iter()
            .enumerate()
            .map(|(row, message)| position_message(graph, message, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            participants,
            messages,
            size,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// The y-coordinate of message row `row`.
pub fn row_y(row: usize) -> f32 {
    PADDING + HEADER_SIZE.height() + HEADER_GAP + row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
}

fn column_center(index: usize) -> f32 {
    PADDING + index as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0
}

fn canvas_size(participants: usize, messages: usize) -> Size {
    Size::new(
        participants as f32 * COLUMN_WIDTH + PADDING * 2.0,
        PADDING + HEADER_SIZE.height() + HEADER_GAP + messages as f32 * ROW_HEIGHT + BOTTOM_MARGIN,
    )
}

fn participant_x(graph: &SequenceGraph, id: &str) -> Result<f32, MermaidError> {
    graph
        .participant_index(id)
        .map(column_center)
        .ok_or_else(|| MermaidError::Layout(format!("message refers to unknown participant `{id}`")))
}

fn position_message(
    graph: &SequenceGraph,
    message: &semantic::Message,
    row: usize,
) -> Result<Message, MermaidError> {
    let y = row_y(row);
    let from = Point::new(participant_x(graph, message.from())?, y);
    let to = if message.is_self_message() {
        from
    } else {
        Point::new(participant_x(graph, message.to())?, y)
    };

    // Self-messages hook out to the right and come back
    let arrow = if message.is_self_message() {
        ArrowLine::new(from.with_x(from.x() + SELF_MESSAGE_WIDTH), to, MESSAGE_CLASS)
    } else {
        ArrowLine::new(from, to, MESSAGE_CLASS)
    };

    let label = (!message.text().is_empty()).then(|| {
        let anchor = arrow.start().midpoint(arrow.end());
        PositionedDrawable::new(Text::single_line(message.text(), MESSAGE_LABEL_CLASS))
            .with_position(anchor.with_y(y - MESSAGE_LABEL_OFFSET))
    });

    Ok(Message {
        y_position: y,
        arrow,
        label,
    })
}
