//! Remote store port for the `tasks` and `comments` tables.

use super::{CommentRecord, NewCommentRecord, NewTaskRecord, TaskPatch, TaskRecord};
use crate::board::domain::TaskId;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote store operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote tables backing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Task rows.
    Tasks,
    /// Comment rows.
    Comments,
}

impl Table {
    /// Returns the remote table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hosted-database contract consumed by the board.
///
/// Every call is a suspension point; timeouts and retries, if any, belong to
/// the implementation.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches every task row.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport or authorisation failure.
    async fn select_tasks(&self) -> RemoteResult<Vec<TaskRecord>>;

    /// Fetches every comment row.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport or authorisation failure.
    async fn select_comments(&self) -> RemoteResult<Vec<CommentRecord>>;

    /// Inserts a task row and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on constraint or transport failure.
    async fn insert_task(&self, row: NewTaskRecord) -> RemoteResult<TaskRecord>;

    /// Inserts a comment row and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Constraint`] when the referenced task does not
    /// exist, or another [`RemoteError`] on transport failure.
    async fn insert_comment(&self, row: NewCommentRecord) -> RemoteResult<CommentRecord>;

    /// Applies a partial update to a task row.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotFound`] when the row does not exist.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> RemoteResult<()>;

    /// Deletes a task row. Its comments go with it.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotFound`] when the row does not exist.
    async fn delete_task(&self, id: TaskId) -> RemoteResult<()>;
}

/// Failure raised by every remote store call.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    /// The store could not be reached or the request failed in transit.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The session is not permitted to perform the request.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The store rejected the row.
    #[error("constraint violation on {table}: {message}")]
    Constraint {
        /// Table that rejected the row.
        table: Table,
        /// Store-provided description.
        message: String,
    },

    /// The addressed row does not exist.
    #[error("{table} row not found: {id}")]
    NotFound {
        /// Table that was addressed.
        table: Table,
        /// Identifier that was addressed.
        id: String,
    },
}

impl RemoteError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Builds a constraint violation for `table`.
    pub fn constraint(table: Table, message: impl Into<String>) -> Self {
        Self::Constraint {
            table,
            message: message.into(),
        }
    }

    /// Builds a missing-row error for `table`.
    pub fn not_found(table: Table, id: impl Into<String>) -> Self {
        Self::NotFound {
            table,
            id: id.into(),
        }
    }
}
