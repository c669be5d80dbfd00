//! Diesel row models for board persistence.

use super::schema::{comments, tasks};
use crate::board::ports::{CommentRecord, TaskRecord};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task text.
    pub content: String,
    /// Status wire value.
    pub status: String,
    /// Priority wire value.
    pub priority: String,
}

impl From<TaskRow> for TaskRecord {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id.to_string(),
            content: row.content,
            status: row.status,
            priority: row.priority,
        }
    }
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task text.
    pub content: String,
    /// Status wire value.
    pub status: String,
    /// Priority wire value.
    pub priority: String,
}

/// Partial update model for task records. `None` columns are not written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New status wire value.
    pub status: Option<String>,
    /// New priority wire value.
    pub priority: Option<String>,
}

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Comment text.
    pub content: String,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}

impl From<CommentRow> for CommentRecord {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id.to_string(),
            content: row.content,
            task_id: row.task_id.to_string(),
            timestamp: row.timestamp,
        }
    }
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Comment text.
    pub content: String,
    /// Owning task identifier.
    pub task_id: uuid::Uuid,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
}
