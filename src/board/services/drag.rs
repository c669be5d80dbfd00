//! Drag-end events reported by the presentation layer.

use crate::board::domain::{Slot, Status, TaskId};

/// Position reported by the drag gesture: a column identifier and an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    /// Column identifier as rendered, normally a [`Status`] wire value.
    pub column_id: String,
    /// Index within the column's task list.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location from a raw column identifier.
    #[must_use]
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }

    /// Creates a location addressing the column for `status`.
    #[must_use]
    pub fn column(status: Status, index: usize) -> Self {
        Self::new(status.as_str(), index)
    }

    /// Resolves the column identifier into a board slot.
    pub(crate) fn to_slot(&self) -> Option<Slot> {
        Status::try_from(self.column_id.as_str())
            .ok()
            .map(|status| Slot::new(status, self.index))
    }
}

/// Completed drag of a task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// Task being dragged.
    pub task_id: TaskId,
    /// Where the drag started.
    pub source: DragLocation,
    /// Where the card was dropped; `None` when dropped outside any column.
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    /// Creates a drag that landed on `destination`.
    #[must_use]
    pub const fn new(task_id: TaskId, source: DragLocation, destination: DragLocation) -> Self {
        Self {
            task_id,
            source,
            destination: Some(destination),
        }
    }

    /// Creates a drag that was dropped outside every column.
    #[must_use]
    pub const fn cancelled(task_id: TaskId, source: DragLocation) -> Self {
        Self {
            task_id,
            source,
            destination: None,
        }
    }
}
