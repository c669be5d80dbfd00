//! Results of reconciliation operations.

use crate::board::{
    domain::{BoardDomainError, RelocateError, TaskId},
    ports::RemoteError,
};
use thiserror::Error;

/// What an operation did to the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The remote store confirmed the change and the snapshot was updated.
    Applied,
    /// Nothing was changed locally.
    Skipped(SkipReason),
}

impl Reconciliation {
    /// Returns `true` when the snapshot was updated.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an operation left the view model alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Content was empty after trimming; no remote call was made.
    EmptyContent,
    /// A comment was submitted with no task selected.
    NoActiveTask,
    /// The card was dropped outside every column.
    NoDestination,
    /// The card was dropped where it started.
    SamePosition,
    /// The gesture named a column that does not exist.
    UnknownColumn(String),
    /// The gesture positions do not match the current snapshot.
    InvalidMove(RelocateError),
    /// The remote call succeeded but the task is not on the board.
    TaskNotFound(TaskId),
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The remote store call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// The remote store returned a row that fails validation.
    #[error("invalid row from remote store: {0}")]
    InvalidRecord(#[from] BoardDomainError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
