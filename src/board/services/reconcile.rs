//! Reconciliation operations: one remote call, then a local patch.
//!
//! Each operation validates its input, issues its remote call and only then
//! swaps the next [`Board`] into the [`BoardStore`]. A failed call is logged
//! and returned with the snapshot exactly as it was. Operations borrow the
//! service mutably, so one operation's call-to-patch window never overlaps
//! another's on the same board.

use super::{
    BoardServiceError, BoardServiceResult, DragEnd, Reconciliation, SkipReason,
};
use crate::board::{
    domain::{Board, BoardLayout, Column, Comment, Content, Priority, Task, TaskId},
    ports::{CommentRecord, NewCommentRecord, NewTaskRecord, RemoteStore, TaskPatch, TaskRecord},
    store::BoardStore,
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;

/// Board view model bound to a remote store.
///
/// Besides the snapshot, the service tracks the small amount of
/// presentation state the operations touch: the loading flag, the task
/// whose comment thread is open, and the comment draft.
pub struct BoardService<R, C>
where
    R: RemoteStore,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    clock: Arc<C>,
    layout: BoardLayout,
    store: BoardStore,
    loading: bool,
    active_task: Option<TaskId>,
    comment_draft: String,
}

impl<R, C> BoardService<R, C>
where
    R: RemoteStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default column layout.
    #[must_use]
    pub fn new(remote: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_layout(remote, clock, BoardLayout::default())
    }

    /// Creates a service whose columns use `layout`.
    #[must_use]
    pub fn with_layout(remote: Arc<R>, clock: Arc<C>, layout: BoardLayout) -> Self {
        let store = BoardStore::new(&layout);
        Self {
            remote,
            clock,
            layout,
            store,
            loading: false,
            active_task: None,
            comment_draft: String::new(),
        }
    }

    /// Returns the view-model state holder.
    #[must_use]
    pub const fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns the current columns.
    #[must_use]
    pub fn snapshot(&self) -> &[Column] {
        self.store.snapshot()
    }

    /// Returns `true` while [`Self::load`] is fetching.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the task whose comment thread is open.
    #[must_use]
    pub const fn active_task(&self) -> Option<&TaskId> {
        self.active_task.as_ref()
    }

    /// Opens the comment thread of `task_id`.
    pub fn open_comments(&mut self, task_id: TaskId) {
        self.active_task = Some(task_id);
    }

    /// Closes the open comment thread, keeping the draft.
    pub fn close_comments(&mut self) {
        self.active_task = None;
    }

    /// Returns the comment being typed.
    #[must_use]
    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    /// Updates the comment being typed.
    pub fn set_comment_draft(&mut self, draft: impl Into<String>) {
        self.comment_draft = draft.into();
    }

    /// Fetches every task and comment and rebuilds the columns.
    ///
    /// Rows that fail validation are dropped with a warning. On failure the
    /// snapshot is left as it was; the loading flag is cleared either way.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when either fetch fails.
    pub async fn load(&mut self) -> BoardServiceResult<Reconciliation> {
        self.loading = true;
        let fetched = self.fetch_board().await;
        self.loading = false;

        let board = fetched.map_err(|err| failed("load", err))?;
        tracing::info!(tasks = board.task_count(), "board loaded");
        self.store.replace(board);
        Ok(Reconciliation::Applied)
    }

    async fn fetch_board(&self) -> BoardServiceResult<Board> {
        let task_rows = self.remote.select_tasks().await?;
        let comment_rows = self.remote.select_comments().await?;

        let tasks = ingest_tasks(task_rows);
        let known: HashSet<&TaskId> = tasks.iter().map(Task::id).collect();
        let comments = ingest_comments(comment_rows, &known);
        Ok(Board::from_parts(&self.layout, tasks, comments))
    }

    /// Applies a completed drag.
    ///
    /// A move between columns writes the destination status remotely before
    /// the lists change. A reorder within one column is local only: the
    /// status is unchanged and the store does not persist ordering.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when the status update fails.
    pub async fn move_task(&mut self, drag: DragEnd) -> BoardServiceResult<Reconciliation> {
        let DragEnd {
            task_id,
            source,
            destination,
        } = drag;
        let Some(destination) = destination else {
            return Ok(skipped("move", SkipReason::NoDestination));
        };
        let Some(from) = source.to_slot() else {
            return Ok(skipped("move", SkipReason::UnknownColumn(source.column_id)));
        };
        let Some(to) = destination.to_slot() else {
            return Ok(skipped(
                "move",
                SkipReason::UnknownColumn(destination.column_id),
            ));
        };
        if from == to {
            return Ok(skipped("move", SkipReason::SamePosition));
        }

        let mut next = self.store.board().clone();
        if let Err(err) = next.relocate(&task_id, from, to) {
            return Ok(skipped("move", SkipReason::InvalidMove(err)));
        }

        if from.status != to.status {
            self.remote
                .update_task(task_id.clone(), TaskPatch::status(to.status))
                .await
                .map_err(|err| failed("move", err.into()))?;
        }

        self.store.replace(next);
        tracing::debug!(task_id = %task_id, from = %from.status, to = %to.status, "task moved");
        Ok(Reconciliation::Applied)
    }

    /// Creates a task in the start column.
    ///
    /// Blank content is a no-op and never reaches the remote store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when the insert fails, or
    /// [`BoardServiceError::InvalidRecord`] when the returned row is invalid.
    pub async fn create_task(&mut self, content: &str) -> BoardServiceResult<Reconciliation> {
        let Ok(content) = Content::new(content) else {
            return Ok(skipped("create", SkipReason::EmptyContent));
        };

        let record = self
            .remote
            .insert_task(NewTaskRecord::new(content))
            .await
            .map_err(|err| failed("create", err.into()))?;
        let task = Task::try_from(record).map_err(|err| failed("create", err.into()))?;

        let mut next = self.store.board().clone();
        tracing::debug!(task_id = %task.id(), "task created");
        next.push_task(task);
        self.store.replace(next);
        Ok(Reconciliation::Applied)
    }

    /// Changes a task's priority tag.
    ///
    /// Setting the priority a task already has leaves the snapshot
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when the update fails.
    pub async fn set_priority(
        &mut self,
        task_id: &TaskId,
        priority: Priority,
    ) -> BoardServiceResult<Reconciliation> {
        self.remote
            .update_task(task_id.clone(), TaskPatch::priority(priority))
            .await
            .map_err(|err| failed("prioritize", err.into()))?;

        let mut next = self.store.board().clone();
        let Some(task) = next.task_mut(task_id) else {
            return Ok(skipped(
                "prioritize",
                SkipReason::TaskNotFound(task_id.clone()),
            ));
        };
        if task.priority() == priority {
            return Ok(Reconciliation::Applied);
        }
        task.set_priority(priority);

        self.store.replace(next);
        tracing::debug!(task_id = %task_id, priority = %priority, "task reprioritized");
        Ok(Reconciliation::Applied)
    }

    /// Deletes a task. No status precondition is enforced here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when the delete fails.
    pub async fn delete_task(&mut self, task_id: &TaskId) -> BoardServiceResult<Reconciliation> {
        self.remote
            .delete_task(task_id.clone())
            .await
            .map_err(|err| failed("delete", err.into()))?;

        if self.active_task.as_ref() == Some(task_id) {
            self.active_task = None;
        }

        let mut next = self.store.board().clone();
        if next.remove_task(task_id).is_none() {
            return Ok(skipped("delete", SkipReason::TaskNotFound(task_id.clone())));
        }

        self.store.replace(next);
        tracing::debug!(task_id = %task_id, "task deleted");
        Ok(Reconciliation::Applied)
    }

    /// Adds a comment to the task whose thread is open.
    ///
    /// On success the draft is cleared and the thread closed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Remote`] when the insert fails, or
    /// [`BoardServiceError::InvalidRecord`] when the returned row is invalid.
    pub async fn add_comment(&mut self, content: &str) -> BoardServiceResult<Reconciliation> {
        let Some(task_id) = self.active_task.clone() else {
            return Ok(skipped("comment", SkipReason::NoActiveTask));
        };
        let Ok(content) = Content::new(content) else {
            return Ok(skipped("comment", SkipReason::EmptyContent));
        };

        let row = NewCommentRecord {
            content,
            task_id,
            timestamp: self.clock.utc(),
        };
        let record = self
            .remote
            .insert_comment(row)
            .await
            .map_err(|err| failed("comment", err.into()))?;
        let comment = Comment::try_from(record).map_err(|err| failed("comment", err.into()))?;

        self.comment_draft.clear();
        self.active_task = None;

        let mut next = self.store.board().clone();
        let owner = comment.task_id().clone();
        let Some(task) = next.task_mut(&owner) else {
            return Ok(skipped("comment", SkipReason::TaskNotFound(owner)));
        };
        task.push_comment(comment);

        self.store.replace(next);
        tracing::debug!(task_id = %owner, "comment added");
        Ok(Reconciliation::Applied)
    }

    /// Submits the current draft as a comment on the open thread.
    ///
    /// # Errors
    ///
    /// See [`Self::add_comment`].
    pub async fn submit_comment_draft(&mut self) -> BoardServiceResult<Reconciliation> {
        let draft = self.comment_draft.clone();
        self.add_comment(&draft).await
    }
}

fn failed(operation: &'static str, err: BoardServiceError) -> BoardServiceError {
    tracing::error!(operation, error = %err, "remote call failed; snapshot unchanged");
    err
}

fn skipped(operation: &'static str, reason: SkipReason) -> Reconciliation {
    tracing::debug!(operation, reason = ?reason, "operation skipped");
    Reconciliation::Skipped(reason)
}

/// Validates task rows, dropping invalid rows and repeated identifiers.
fn ingest_tasks(rows: Vec<TaskRecord>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(rows.len());
    for row in rows {
        let row_id = row.id.clone();
        match Task::try_from(row) {
            Ok(task) if seen.insert(task.id().clone()) => tasks.push(task),
            Ok(_) => tracing::warn!(table = "tasks", id = %row_id, "dropping duplicate row"),
            Err(err) => {
                tracing::warn!(table = "tasks", id = %row_id, error = %err, "dropping invalid row");
            }
        }
    }
    tasks
}

/// Validates comment rows, dropping invalid rows and rows whose task is
/// not among `known`.
fn ingest_comments(rows: Vec<CommentRecord>, known: &HashSet<&TaskId>) -> Vec<Comment> {
    rows.into_iter()
        .filter_map(|row| {
            let row_id = row.id.clone();
            match Comment::try_from(row) {
                Ok(comment) if known.contains(comment.task_id()) => Some(comment),
                Ok(comment) => {
                    tracing::warn!(
                        table = "comments",
                        id = %row_id,
                        task_id = %comment.task_id(),
                        "dropping comment for unknown task"
                    );
                    None
                }
                Err(err) => {
                    tracing::warn!(table = "comments", id = %row_id, error = %err, "dropping invalid row");
                    None
                }
            }
        })
        .collect()
}
