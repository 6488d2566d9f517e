//! Error types for attributed entities.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while querying nodes and edges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The entity has no attribute with the requested key.
    #[error("{entity} has no attribute \"{key}\"")]
    KeyMissing { entity: String, key: String },
}
