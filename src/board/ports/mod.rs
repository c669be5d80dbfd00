//! Port contracts for board persistence.
//!
//! Ports define the remote-store interface consumed by the board services
//! and the row schemas exchanged across it.

pub mod records;
pub mod remote_store;

pub use records::{CommentRecord, NewCommentRecord, NewTaskRecord, TaskPatch, TaskRecord};
pub use remote_store::{RemoteError, RemoteResult, RemoteStore, Table};
