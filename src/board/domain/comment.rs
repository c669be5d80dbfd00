//! Comment attached to a task.

use super::{CommentId, Content, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable comment on a task, ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    content: Content,
    timestamp: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment from validated parts.
    #[must_use]
    pub const fn new(
        id: CommentId,
        task_id: TaskId,
        content: Content,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            task_id,
            content,
            timestamp,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> &CommentId {
        &self.id
    }

    /// Returns the identifier of the task this comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
