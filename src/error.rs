use thiserror::Error;

/// Errors raised while reading or constructing a graph.
///
/// Failing to find a Hamiltonian path is not an error; the solver reports
/// that outcome as `None`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Input contained no significant (non-blank, non-comment) lines.
    #[error("empty input: no graph description found")]
    EmptyInput,

    /// The header line is missing tokens or contains non-integer tokens.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// An edge line could not be parsed as two integers.
    #[error("invalid edge: {0}")]
    InvalidEdge(String),

    /// An edge endpoint lies outside the declared vertex range.
    #[error("edge endpoint {vertex} out of range 1..={n}")]
    VertexOutOfRange { vertex: i64, n: usize },

    /// Underlying I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        GraphError::InvalidHeader(msg.into())
    }

    pub fn invalid_edge(msg: impl Into<String>) -> Self {
        GraphError::InvalidEdge(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
