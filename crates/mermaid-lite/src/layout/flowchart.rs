//! Grid layout for flowcharts.
//!
//! Nodes are placed in insertion order on a grid of `ceil(sqrt(n))` columns.
//! The diagram direction decides the fill order and which axes are mirrored:
//!
//! ```text
//! TD: 0 1 2      LR: 0 3 6      RL: 6 3 0      BT: 6 7 8
//!     3 4 5          1 4 7          7 4 1          3 4 5
//!     6 7 8          2 5 8          8 5 2          0 1 2
//! ```

use log::debug;

use mermaid_lite_core::{
    draw::{ArrowLine, NodeBox, PositionedDrawable, Text},
    geometry::{Point, Size},
    label::{DEFAULT_MAX_LABEL_CHARS, trim_label, wrap_label},
    semantic::{Direction, FlowGraph, FlowNode},
};

use super::geometry::clip_to_boxes;
use crate::error::MermaidError;

/// Size of every flow node box.
pub const NODE_SIZE: Size = Size::new(168.0, 56.0);
/// Horizontal gap between grid columns.
pub const GAP_X: f32 = 44.0;
/// Vertical gap between grid rows.
pub const GAP_Y: f32 = 34.0;
/// Outer canvas padding.
pub const PADDING: f32 = 28.0;

const LABEL_LINE_CHARS: usize = 18;
const LABEL_MAX_LINES: usize = 3;

const NODE_CLASS: &str = "pn-mermaid-node";
const LABEL_CLASS: &str = "pn-mermaid-label";
const EDGE_CLASS: &str = "pn-mermaid-edge";

/// A flow node with its box placed on the canvas.
#[derive(Debug, Clone)]
pub struct PositionedNode {
    id: String,
    drawable: PositionedDrawable<NodeBox>,
}

impl PositionedNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn drawable(&self) -> &PositionedDrawable<NodeBox> {
        &self.drawable
    }

    /// Center of the node box.
    pub fn position(&self) -> Point {
        self.drawable.position()
    }
}

/// A positioned flowchart: node boxes in insertion order and clipped edges.
#[derive(Debug, Clone)]
pub struct Layout {
    nodes: Vec<PositionedNode>,
    edges: Vec<ArrowLine>,
    size: Size,
}

impl Layout {
    /// Places every node of `graph` on the grid and routes its edges.
    ///
    /// # Errors
    ///
    /// Returns [`MermaidError::Layout`] if an edge endpoint is not a node of
    /// the graph.
    pub fn new(graph: &FlowGraph, direction: Direction) -> Result<Self, MermaidError> {
        let count = graph.node_count();
        let (columns, rows) = grid_dimensions(count);
        debug!(columns, rows, direction:%; "Flowchart grid");

        let nodes: Vec<PositionedNode> = graph
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                let (column, row) = grid_cell(index, columns, rows, direction);
                PositionedNode {
                    id: node.id().to_string(),
                    drawable: PositionedDrawable::new(node_box(node))
                        .with_position(cell_center(column, row)),
                }
            })
            .collect();

        let mut edges = Vec::with_capacity(graph.edges().len());
        for edge in graph.edges() {
            if edge.is_self_loop() {
                debug!(node = edge.from(); "Skipping self-loop edge");
                continue;
            }
            let from = node_center(graph, &nodes, edge.from())?;
            let to = node_center(graph, &nodes, edge.to())?;
            let (start, end) = clip_to_boxes(from, to, NODE_SIZE);
            edges.push(ArrowLine::new(start, end, EDGE_CLASS));
        }

        Ok(Self {
            nodes,
            edges,
            size: canvas_size(columns, rows),
        })
    }

    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ArrowLine] {
        &self.edges
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// Returns `(columns, rows)` for a square-ish grid holding `count` nodes.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut columns = 1;
    while columns * columns < count {
        columns += 1;
    }
    (columns, count.div_ceil(columns))
}

/// Maps a node's insertion index to its `(column, row)` cell.
pub fn grid_cell(index: usize, columns: usize, rows: usize, direction: Direction) -> (usize, usize) {
    let (column, row) = if direction.is_horizontal() && rows > 1 {
        (index / rows, index % rows)
    } else {
        (index % columns, index / columns)
    };

    match direction {
        Direction::RL => (columns - 1 - column, row),
        Direction::BT => (column, rows - 1 - row),
        Direction::TD | Direction::LR => (column, row),
    }
}

fn cell_center(column: usize, row: usize) -> Point {
    let x = PADDING + column as f32 * (NODE_SIZE.width() + GAP_X);
    let y = PADDING + row as f32 * (NODE_SIZE.height() + GAP_Y);
    Point::new(x + NODE_SIZE.width() / 2.0, y + NODE_SIZE.height() / 2.0)
}

fn canvas_size(columns: usize, rows: usize) -> Size {
    let extent = |count: usize, length: f32, gap: f32| {
        if count == 0 {
            0.0
        } else {
            count as f32 * length + (count - 1) as f32 * gap
        }
    };
    Size::new(
        PADDING * 2.0 + extent(columns, NODE_SIZE.width(), GAP_X),
        PADDING * 2.0 + extent(rows, NODE_SIZE.height(), GAP_Y),
    )
}

fn node_box(node: &FlowNode) -> NodeBox {
    let lines = wrap_label(
        &trim_label(node.label(), DEFAULT_MAX_LABEL_CHARS),
        LABEL_LINE_CHARS,
        LABEL_MAX_LINES,
    );
    NodeBox::new(NODE_SIZE, NODE_CLASS)
        .with_corner_radius(node.shape().corner_radius())
        .with_label(Text::new(lines, LABEL_CLASS))
}

fn node_center(graph: &FlowGraph, nodes: &[PositionedNode], id: &str) -> Result<Point, MermaidError> {
    graph
        .node_index(id)
        .and_then(|index| nodes.get(index))
        .map(PositionedNode::position)
        .ok_or_else(|| MermaidError::Layout(format!("edge refers to unknown node `{id}`")))
}
