//! Domain model for the kanban board.
//!
//! Tasks, their comments and the three status columns are plain values; all
//! remote concerns stay outside the domain boundary.

mod board;
mod column;
mod comment;
mod content;
mod error;
mod ids;
mod status;
mod task;

pub use board::{Board, RelocateError, Slot};
pub use column::{BoardLayout, Column, ColumnAppearance};
pub use comment::Comment;
pub use content::Content;
pub use error::{BoardDomainError, ParsePriorityError, ParseStatusError};
pub use ids::{CommentId, TaskId};
pub use status::{Priority, Status};
pub use task::Task;
