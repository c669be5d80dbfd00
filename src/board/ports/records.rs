//! Row schemas exchanged with the remote store.
//!
//! Rows coming back from the store carry raw strings and are validated on
//! ingress into domain values; rows going out are built from domain values.

use crate::board::domain::{
    BoardDomainError, Comment, CommentId, Content, Priority, Status, Task, TaskId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `tasks` row as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Status wire value.
    pub status: String,
    /// Priority wire value.
    pub priority: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = BoardDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let TaskRecord {
            id,
            content,
            status,
            priority,
        } = record;
        Ok(Self::new(
            TaskId::new(id)?,
            Content::new(content)?,
            Status::try_from(status.as_str())?,
            Priority::try_from(priority.as_str())?,
        ))
    }
}

/// Insert payload for the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRecord {
    /// Task text.
    pub content: Content,
    /// Initial status.
    pub status: Status,
    /// Initial priority.
    pub priority: Priority,
}

impl NewTaskRecord {
    /// Payload for a freshly created card: status `start`, priority `normal`.
    #[must_use]
    pub const fn new(content: Content) -> Self {
        Self {
            content,
            status: Status::Start,
            priority: Priority::Normal,
        }
    }
}

/// Partial update for a `tasks` row. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New status, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// New priority, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Patch that only changes the status.
    #[must_use]
    pub const fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            priority: None,
        }
    }

    /// Patch that only changes the priority.
    #[must_use]
    pub const fn priority(priority: Priority) -> Self {
        Self {
            status: None,
            priority: Some(priority),
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}

/// A `comments` row as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Comment text.
    pub content: String,
    /// Identifier of the owning task.
    pub task_id: String,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<CommentRecord> for Comment {
    type Error = BoardDomainError;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        let CommentRecord {
            id,
            content,
            task_id,
            timestamp,
        } = record;
        Ok(Self::new(
            CommentId::new(id)?,
            TaskId::new(task_id)?,
            Content::new(content)?,
            timestamp,
        ))
    }
}

/// Insert payload for the `comments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommentRecord {
    /// Comment text.
    pub content: Content,
    /// Identifier of the owning task.
    pub task_id: TaskId,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}
