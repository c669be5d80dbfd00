//! Application services reconciling the board view model with the remote
//! store.

mod drag;
mod outcome;
mod reconcile;

pub use drag::{DragEnd, DragLocation};
pub use outcome::{BoardServiceError, BoardServiceResult, Reconciliation, SkipReason};
pub use reconcile::BoardService;
