use thiserror::Error;

use crate::element::ElementId;

/// Errors surfaced by the editor core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// User-supplied input was rejected; nothing was mutated
    #[error("{0}")]
    Validation(String),

    /// A multi-click construction reached its commit step without enough buffered points
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An element with this id is already in the store
    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    /// A point id that does not resolve to anything in the store
    #[error("Unknown point: {0}")]
    UnknownPoint(ElementId),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
