//! In-memory remote store used for tests and local demos.

use crate::board::{
    domain::TaskId,
    ports::{
        CommentRecord, NewCommentRecord, NewTaskRecord, RemoteError, RemoteResult, RemoteStore,
        Table, TaskPatch, TaskRecord,
    },
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Thread-safe in-memory implementation of [`RemoteStore`].
///
/// Rows keep insertion order. Identifiers are random UUIDs, comments must
/// reference an existing task, and deleting a task removes its comments.
/// Failures can be injected to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemoteStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: Vec<TaskRecord>,
    comments: Vec<CommentRecord>,
    pending_failure: Option<RemoteError>,
    unavailable: bool,
}

impl InMemoryState {
    /// Consumes the injected failure, if any, for the current call.
    fn take_failure(&mut self) -> RemoteResult<()> {
        if let Some(err) = self.pending_failure.take() {
            return Err(err);
        }
        if self.unavailable {
            return Err(RemoteError::transport(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "remote store unavailable",
            )));
        }
        Ok(())
    }

    fn task_mut(&mut self, id: &TaskId) -> RemoteResult<&mut TaskRecord> {
        self.tasks
            .iter_mut()
            .find(|row| row.id == id.as_str())
            .ok_or_else(|| RemoteError::not_found(Table::Tasks, id.as_str()))
    }
}

impl InMemoryRemoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the next call with `err`.
    pub fn fail_next(&self, err: RemoteError) {
        if let Ok(mut state) = self.state.write() {
            state.pending_failure = Some(err);
        }
    }

    /// Makes every call fail with a transport error until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = unavailable;
        }
    }

    /// Clears injected failures and restores availability.
    pub fn reset_failures(&self) {
        if let Ok(mut state) = self.state.write() {
            state.pending_failure = None;
            state.unavailable = false;
        }
    }

    /// Inserts a task row verbatim, bypassing validation.
    pub fn seed_task(&self, row: TaskRecord) {
        if let Ok(mut state) = self.state.write() {
            state.tasks.push(row);
        }
    }

    /// Inserts a comment row verbatim, bypassing validation.
    pub fn seed_comment(&self, row: CommentRecord) {
        if let Ok(mut state) = self.state.write() {
            state.comments.push(row);
        }
    }

    /// Returns a copy of every task row.
    #[must_use]
    pub fn task_rows(&self) -> Vec<TaskRecord> {
        self.state
            .read()
            .map(|state| state.tasks.clone())
            .unwrap_or_default()
    }

    /// Returns a copy of every comment row.
    #[must_use]
    pub fn comment_rows(&self) -> Vec<CommentRecord> {
        self.state
            .read()
            .map(|state| state.comments.clone())
            .unwrap_or_default()
    }

    fn write(&self) -> RemoteResult<std::sync::RwLockWriteGuard<'_, InMemoryState>> {
        self.state
            .write()
            .map_err(|err| RemoteError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn select_tasks(&self) -> RemoteResult<Vec<TaskRecord>> {
        let mut state = self.write()?;
        state.take_failure()?;
        Ok(state.tasks.clone())
    }

    async fn select_comments(&self) -> RemoteResult<Vec<CommentRecord>> {
        let mut state = self.write()?;
        state.take_failure()?;
        let mut comments = state.comments.clone();
        comments.sort_by_key(|row| row.timestamp);
        Ok(comments)
    }

    async fn insert_task(&self, row: NewTaskRecord) -> RemoteResult<TaskRecord> {
        let mut state = self.write()?;
        state.take_failure()?;
        let record = TaskRecord {
            id: Uuid::new_v4().to_string(),
            content: row.content.into(),
            status: row.status.as_str().to_owned(),
            priority: row.priority.as_str().to_owned(),
        };
        state.tasks.push(record.clone());
        Ok(record)
    }

    async fn insert_comment(&self, row: NewCommentRecord) -> RemoteResult<CommentRecord> {
        let mut state = self.write()?;
        state.take_failure()?;
        if !state.tasks.iter().any(|task| task.id == row.task_id.as_str()) {
            return Err(RemoteError::constraint(
                Table::Comments,
                format!("task {} does not exist", row.task_id),
            ));
        }
        let record = CommentRecord {
            id: Uuid::new_v4().to_string(),
            content: row.content.into(),
            task_id: row.task_id.as_str().to_owned(),
            timestamp: row.timestamp,
        };
        state.comments.push(record.clone());
        Ok(record)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> RemoteResult<()> {
        let mut state = self.write()?;
        state.take_failure()?;
        let row = state.task_mut(&id)?;
        if let Some(status) = patch.status {
            row.status = status.as_str().to_owned();
        }
        if let Some(priority) = patch.priority {
            row.priority = priority.as_str().to_owned();
        }
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> RemoteResult<()> {
        let mut state = self.write()?;
        state.take_failure()?;
        let before = state.tasks.len();
        state.tasks.retain(|row| row.id != id.as_str());
        if state.tasks.len() == before {
            return Err(RemoteError::not_found(Table::Tasks, id.as_str()));
        }
        state.comments.retain(|row| row.task_id != id.as_str());
        Ok(())
    }
}
