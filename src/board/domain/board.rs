//! The three-column board value held by the view model.

use super::{BoardLayout, Column, Comment, Status, Task, TaskId};
use std::collections::HashMap;
use thiserror::Error;

/// A position on the board: a column and an index within its task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Column the position refers to.
    pub status: Status,
    /// Index within the column's task list.
    pub index: usize,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(status: Status, index: usize) -> Self {
        Self { status, index }
    }
}

/// Reasons a relocation cannot be applied to the current board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelocateError {
    /// No task exists at the source position.
    #[error("no task at index {} of column {}", .0.index, .0.status)]
    EmptySource(Slot),

    /// The task at the source position is not the task being moved.
    #[error("task {found} occupies index {} of column {}, expected {expected}", .slot.index, .slot.status)]
    TaskMismatch {
        /// Source position that was inspected.
        slot: Slot,
        /// Task the caller intended to move.
        expected: TaskId,
        /// Task actually found at the source position.
        found: TaskId,
    },

    /// The destination index lies beyond the end of the destination column.
    #[error("index {} is past the end of column {}", .0.index, .0.status)]
    DestinationOutOfRange(Slot),
}

/// Column-partitioned snapshot of every task on the board.
///
/// Exactly one column exists per [`Status`], in [`Status::ALL`] order, and
/// every task sits in the column matching its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; 3],
}

impl Board {
    /// Creates a board with three empty columns.
    #[must_use]
    pub fn empty(layout: &BoardLayout) -> Self {
        Self {
            columns: Status::ALL.map(|status| Column::empty(status, layout)),
        }
    }

    /// Partitions `tasks` into columns by status and attaches each comment to
    /// the task it references.
    ///
    /// Tasks keep their input order within a column. Comments whose task is
    /// absent are ignored; callers filter them beforehand if they need to
    /// report them.
    #[must_use]
    pub fn from_parts(
        layout: &BoardLayout,
        tasks: impl IntoIterator<Item = Task>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Self {
        let mut threads: HashMap<TaskId, Vec<Comment>> = HashMap::new();
        for comment in comments {
            threads
                .entry(comment.task_id().clone())
                .or_default()
                .push(comment);
        }

        let mut board = Self::empty(layout);
        for task in tasks {
            let thread = threads.remove(task.id()).unwrap_or_default();
            board.push_task(task.with_comments(thread));
        }
        board
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub const fn column(&self, status: Status) -> &Column {
        let [start, in_progress, done] = &self.columns;
        match status {
            Status::Start => start,
            Status::InProgress => in_progress,
            Status::Done => done,
        }
    }

    const fn column_mut(&mut self, status: Status) -> &mut Column {
        let [start, in_progress, done] = &mut self.columns;
        match status {
            Status::Start => start,
            Status::InProgress => in_progress,
            Status::Done => done,
        }
    }

    /// Iterates over every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks().iter())
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks().len()).sum()
    }

    /// Finds a task by identifier across all columns.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().find(|task| task.id() == id)
    }

    /// Returns the position of a task, if it is on the board.
    #[must_use]
    pub fn locate(&self, id: &TaskId) -> Option<Slot> {
        self.columns.iter().find_map(|column| {
            column
                .tasks()
                .iter()
                .position(|task| task.id() == id)
                .map(|index| Slot::new(column.id(), index))
        })
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.tasks_mut().iter_mut())
            .find(|task| task.id() == id)
    }

    /// Appends a task to the end of the column matching its status.
    pub(crate) fn push_task(&mut self, task: Task) {
        self.column_mut(task.status()).tasks_mut().push(task);
    }

    /// Removes a task from whichever column holds it.
    pub(crate) fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let slot = self.locate(id)?;
        let tasks = self.column_mut(slot.status).tasks_mut();
        (slot.index < tasks.len()).then(|| tasks.remove(slot.index))
    }

    /// Moves `task_id` from `from` to `to`, overwriting its status with the
    /// destination column's.
    ///
    /// The source index must address `task_id` and the destination index must
    /// lie within `[0, len]` of the destination list as it stands once the
    /// task has been taken out, so a reorder within one column never
    /// duplicates or loses the task. The board is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns a [`RelocateError`] describing the invalid position.
    pub(crate) fn relocate(
        &mut self,
        task_id: &TaskId,
        from: Slot,
        to: Slot,
    ) -> Result<(), RelocateError> {
        let found = self
            .column(from.status)
            .tasks()
            .get(from.index)
            .map(|task| task.id().clone())
            .ok_or(RelocateError::EmptySource(from))?;
        if &found != task_id {
            return Err(RelocateError::TaskMismatch {
                slot: from,
                expected: task_id.clone(),
                found,
            });
        }

        let destination_len = self.column(to.status).tasks().len();
        let available = if from.status == to.status {
            destination_len.saturating_sub(1)
        } else {
            destination_len
        };
        if to.index > available {
            return Err(RelocateError::DestinationOutOfRange(to));
        }

        let mut task = self.column_mut(from.status).tasks_mut().remove(from.index);
        task.set_status(to.status);
        self.column_mut(to.status).tasks_mut().insert(to.index, task);
        Ok(())
    }
}
