use nodal_core::CoreError;
use thiserror::Error;

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge lacks the attribute requested as matrix cell value.
    #[error("Edge \"{edge}\" has no attribute \"{key}\"")]
    KeyMissing { edge: String, key: String },

    /// An edge endpoint is not a node of the graph.
    #[error("Edge \"{edge}\" references node \"{node}\" which is not in the graph")]
    OutOfRange { edge: String, node: String },

    /// The requested strategy exists but has no implementation.
    #[error("Strategy not implemented: {0}")]
    UnimplementedStrategy(String),

    #[error("Unknown view \"{0}\" (expected obj, table or plot)")]
    UnknownView(String),

    /// Matrix data whose labels or cells are inconsistent.
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid graph description: {0}")]
    Description(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::KeyMissing { entity, key } => Self::KeyMissing { edge: entity, key },
        }
    }
}
