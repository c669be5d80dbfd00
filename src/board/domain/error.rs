//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier assigned by the remote store was empty.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// Task or comment content is empty after trimming.
    #[error("content must not be empty")]
    EmptyContent,

    /// The status value is not one of the board columns.
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// The priority value is not a known severity tag.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
}

/// Error returned while parsing task statuses from the remote store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing task priorities from the remote store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
