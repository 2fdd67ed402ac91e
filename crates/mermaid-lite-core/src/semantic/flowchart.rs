//! Flowchart graph model.

use indexmap::IndexMap;
use log::debug;

/// The token pattern that supplied a node's label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    /// `id` with no brackets
    #[default]
    Bare,
    /// `id[label]`
    Square,
    /// `id(label)`
    Round,
    /// `id((label))`
    Circle,
    /// `id{label}`
    Rhombus,
}

impl NodeShape {
    /// Corner radius of the rectangle drawn for this shape.
    pub fn corner_radius(self) -> f32 {
        match self {
            Self::Bare | Self::Square => 6.0,
            Self::Round => 16.0,
            Self::Circle => 28.0,
            Self::Rhombus => 2.0,
        }
    }
}

/// A flowchart node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    id: String,
    label: String,
    shape: NodeShape,
}

impl FlowNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    /// A node is bare while its label is still its id.
    fn is_bare(&self) -> bool {
        self.label == self.id
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    from: String,
    to: String,
}

impl FlowEdge {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns `true` when both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Nodes in first-appearance order plus an ordered edge list.
///
/// Every edge endpoint is always present in the node map. Duplicate edges
/// are kept.
///
/// # Examples
///
/// ```
/// # use mermaid_lite_core::semantic::{FlowGraph, NodeShape};
/// let mut graph = FlowGraph::new();
/// graph.add_edge("A", "B");
/// graph.register_node("A", Some("Start"), NodeShape::Square);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node("A").map(|n| n.label()), Some("Start"));
/// assert_eq!(graph.node("B").map(|n| n.label()), Some("B"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    nodes: IndexMap<String, FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node or upgrades its label.
    ///
    /// A new id takes `label` when supplied and its own id otherwise. An
    /// existing node takes a supplied label only while its label still
    /// equals its id; an explicit label is never overwritten. The shape
    /// always travels with the label.
    pub fn register_node(&mut self, id: &str, label: Option<&str>, shape: NodeShape) {
        let label = label.filter(|label| !label.is_empty());

        if let Some(node) = self.nodes.get_mut(id) {
            match label {
                Some(label) if node.is_bare() => {
                    debug!(id, label; "Upgrading bare node label");
                    node.label = label.to_string();
                    node.shape = shape;
                }
                _ => {}
            }
            return;
        }

        let (label, shape) = match label {
            Some(label) => (label.to_string(), shape),
            None => (id.to_string(), NodeShape::Bare),
        };
        self.nodes.insert(
            id.to_string(),
            FlowNode {
                id: id.to_string(),
                label,
                shape,
            },
        );
    }

    /// Appends an edge, registering missing endpoints as bare nodes.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.register_node(from, None, NodeShape::Bare);
        self.register_node(to, None, NodeShape::Bare);
        self.edges.push(FlowEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Returns the insertion index of a node.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Iterates nodes in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
