//! Error types for graph traversal.

use thiserror::Error;

/// Traversal and storage error types.
///
/// Variants are grouped by when they surface: configuration errors at
/// construction, invocation errors when `traverse` is called, and the rest
/// while a run is in progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid traversal configuration or settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed to a traversal entrypoint.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A filter produced a value outside the filter-result protocol.
    #[error("Filter contract violated: {0}")]
    FilterContract(String),

    /// Vertex does not exist in the datasource.
    #[error("Vertex '{0}' not found")]
    VertexNotFound(String),

    /// Edge does not exist in the datasource.
    #[error("Edge '{0}' not found")]
    EdgeNotFound(String),

    /// Vertex already exists (duplicate id).
    #[error("Vertex '{0}' already exists")]
    VertexExists(String),

    /// Edge already exists (duplicate id).
    #[error("Edge '{0}' already exists")]
    EdgeExists(String),

    /// Storage layer failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failure raised by a caller-supplied filter, expander or visitor.
    #[error("Callback error: {0}")]
    Callback(String),

    /// The traversal exceeded its iteration budget.
    #[error("Traversal aborted after {0} iterations")]
    TooManyIterations(usize),

    /// A collaborator stopped the traversal on purpose.
    ///
    /// `Traverser::traverse` treats this as a normal completion.
    #[error("Traversal intentionally aborted")]
    Aborted,
}

/// Result type alias for traversal operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true for the dangling-reference outcome that default
    /// expanders are allowed to recover from.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound(_))
    }
}
