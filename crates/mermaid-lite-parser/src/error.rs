use thiserror::Error;

/// Reasons a diagram source cannot be turned into a graph.
///
/// Individual statements that fail to parse are never errors; they are
/// dropped and parsing continues. These variants describe whole-diagram
/// failures only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("diagram source is empty")]
    EmptySource,

    #[error("unrecognized diagram type starting with `{header}`")]
    Unrecognized { header: String },

    #[error("flowchart contains no nodes")]
    NoNodes,

    #[error("sequence diagram contains no participants")]
    NoParticipants,

    #[error("sequence diagram contains no messages")]
    NoMessages,
}

/// A type alias for `Result<T, ParseError>`
pub type Result<T> = std::result::Result<T, ParseError>;
