use thiserror::Error;

/// All possible errors raised by the graph engine and its command line
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Graph has at least one cycle: only {ordered} of {total} vertices could be ordered")]
    CycleDetected { ordered: usize, total: usize },

    #[error("Invalid edge `{0}`: expected FROM:TO")]
    InvalidEdge(String),

    #[error("Invalid edge probability {0}: must be within 0.0..=1.0")]
    InvalidProbability(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Number of vertices left unordered when a cycle stopped the sort
    pub fn unresolved(&self) -> Option<usize> {
        match self {
            GraphError::CycleDetected { ordered, total } => Some(total - ordered),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
