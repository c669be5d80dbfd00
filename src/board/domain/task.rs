//! Task card shown on the board.

use super::{Comment, Content, Priority, Status, TaskId};
use serde::{Deserialize, Serialize};

/// A task card. Its status always matches the column holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: Content,
    status: Status,
    priority: Priority,
    comments: Vec<Comment>,
}

impl Task {
    /// Creates a task without comments.
    #[must_use]
    pub const fn new(id: TaskId, content: Content, status: Status, priority: Priority) -> Self {
        Self {
            id,
            content,
            status,
            priority,
            comments: Vec::new(),
        }
    }

    /// Replaces the comment thread, ordering it by timestamp.
    #[must_use]
    pub fn with_comments(mut self, comments: impl IntoIterator<Item = Comment>) -> Self {
        self.comments = comments.into_iter().collect();
        self.comments.sort_by_key(Comment::timestamp);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the comment thread in creation order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub(crate) const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Appends a comment. Threads are append-only.
    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
