//! Board columns and their configurable appearance.

use super::{Status, Task};
use serde::{Deserialize, Serialize};

/// Title and colour of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAppearance {
    /// Heading shown above the column.
    pub title: String,
    /// Display colour, as understood by the presentation layer.
    pub color: String,
}

impl ColumnAppearance {
    /// Creates a column appearance.
    #[must_use]
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
        }
    }
}

/// Appearance of the three board columns, one per [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Column for [`Status::Start`].
    pub start: ColumnAppearance,
    /// Column for [`Status::InProgress`].
    pub in_progress: ColumnAppearance,
    /// Column for [`Status::Done`].
    pub done: ColumnAppearance,
}

impl BoardLayout {
    /// Returns the appearance configured for `status`.
    #[must_use]
    pub const fn appearance(&self, status: Status) -> &ColumnAppearance {
        match status {
            Status::Start => &self.start,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            start: ColumnAppearance::new("To Do", "#3b82f6"),
            in_progress: ColumnAppearance::new("In Progress", "#f59e0b"),
            done: ColumnAppearance::new("Done", "#10b981"),
        }
    }
}

/// A status column and the tasks rendered under it, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: Status,
    title: String,
    color: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column for `status` using the layout's appearance.
    #[must_use]
    pub fn empty(status: Status, layout: &BoardLayout) -> Self {
        let appearance = layout.appearance(status);
        Self {
            id: status,
            title: appearance.title.clone(),
            color: appearance.color.clone(),
            tasks: Vec::new(),
        }
    }

    /// Returns the status this column represents.
    #[must_use]
    pub const fn id(&self) -> Status {
        self.id
    }

    /// Returns the column heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) const fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }
}
