//! Shared world state for board reconciliation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryRemoteStore,
    domain::{Status, Task},
    services::{BoardService, BoardServiceResult, Reconciliation},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryRemoteStore, DefaultClock>;

/// Scenario world for board reconciliation behaviour tests.
pub struct BoardWorld {
    pub remote: Arc<InMemoryRemoteStore>,
    pub service: TestBoardService,
    pub last_result: Option<BoardServiceResult<Reconciliation>>,
}

impl BoardWorld {
    /// Creates a world over an empty remote store.
    #[must_use]
    pub fn new() -> Self {
        let remote = Arc::new(InMemoryRemoteStore::new());
        let service = BoardService::new(Arc::clone(&remote), Arc::new(DefaultClock));
        Self {
            remote,
            service,
            last_result: None,
        }
    }

    /// Finds a task on the board by its text.
    pub fn task_named(&self, content: &str) -> Result<Task, eyre::Report> {
        self.service
            .store()
            .board()
            .tasks()
            .find(|task| task.content().as_str() == content)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task named {content:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a status named in a scenario.
pub fn parse_status(raw: &str) -> Result<Status, eyre::Report> {
    Status::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
