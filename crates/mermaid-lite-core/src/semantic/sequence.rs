//! Sequence diagram model.

use indexmap::IndexMap;

/// A sequence diagram participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: String,
    label: String,
}

impl Participant {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A message between two participants. Order in the graph is the only
/// sequencing signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    from: String,
    to: String,
    text: String,
}

impl Message {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_self_message(&self) -> bool {
        self.from == self.to
    }
}

/// Participants in declaration or first-appearance order plus the ordered
/// message list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceGraph {
    participants: IndexMap<String, Participant>,
    messages: Vec<Message>,
}

impl SequenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` with itself as label if it is not known yet.
    pub fn register_participant(&mut self, id: &str) {
        if !self.participants.contains_key(id) {
            self.participants.insert(
                id.to_string(),
                Participant {
                    id: id.to_string(),
                    label: id.to_string(),
                },
            );
        }
    }

    /// Handles an explicit `participant`/`actor` declaration.
    ///
    /// Registers the participant, and replaces its label whenever a
    /// non-empty `label` is given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mermaid_lite_core::semantic::SequenceGraph;
    /// let mut graph = SequenceGraph::new();
    /// graph.add_message("A", "B", "hi");
    /// graph.declare_participant("A", Some("Alice"));
    ///
    /// assert_eq!(graph.participant("A").map(|p| p.label()), Some("Alice"));
    /// assert_eq!(graph.participant_index("A"), Some(0));
    /// ```
    pub fn declare_participant(&mut self, id: &str, label: Option<&str>) {
        self.register_participant(id);
        let Some(label) = label.filter(|label| !label.is_empty()) else {
            return;
        };
        if let Some(participant) = self.participants.get_mut(id) {
            participant.label = label.to_string();
        }
    }

    /// Appends a message, registering both participants if new.
    pub fn add_message(&mut self, from: &str, to: &str, text: &str) {
        self.register_participant(from);
        self.register_participant(to);
        self.messages.push(Message {
            from: from.to_string(),
            to: to.to_string(),
            text: text.to_string(),
        });
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.get(id)
    }

    /// Returns the column index of a participant.
    pub fn participant_index(&self, id: &str) -> Option<usize> {
        self.participants.get_index_of(id)
    }

    /// Iterates participants in declaration or first-appearance order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
