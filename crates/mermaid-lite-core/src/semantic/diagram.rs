//! Diagram-level types: the tagged parse result and layout direction.

use std::fmt::{self, Display};

use crate::semantic::{FlowGraph, SequenceGraph};

/// The kinds of diagram this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
}

impl DiagramKind {
    /// Returns the lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
        }
    }
}

impl Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flowchart layout direction.
///
/// # Variants
///
/// - `TD` - top to bottom (default, `TB` is an alias)
/// - `BT` - bottom to top
/// - `LR` - left to right
/// - `RL` - right to left
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    TD,
    BT,
    LR,
    RL,
}

impl Direction {
    /// Parses a direction token, ASCII case-insensitively.
    ///
    /// Unknown tokens fall back to [`Direction::TD`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mermaid_lite_core::semantic::Direction;
    /// assert_eq!(Direction::from_token("lr"), Direction::LR);
    /// assert_eq!(Direction::from_token("TB"), Direction::TD);
    /// assert_eq!(Direction::from_token("XY"), Direction::TD);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "BT" => Self::BT,
            "LR" => Self::LR,
            "RL" => Self::RL,
            _ => Self::TD,
        }
    }

    /// Returns `true` for `LR` and `RL`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LR | Self::RL)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TD => "TD",
            Self::BT => "BT",
            Self::LR => "LR",
            Self::RL => "RL",
        };
        f.write_str(name)
    }
}

/// A successfully parsed diagram, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramSource {
    Flowchart {
        graph: FlowGraph,
        direction: Direction,
    },
    Sequence(SequenceGraph),
}

impl DiagramSource {
    /// Returns the kind of this diagram.
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Flowchart { .. } => DiagramKind::Flowchart,
            Self::Sequence(_) => DiagramKind::Sequence,
        }
    }
}
