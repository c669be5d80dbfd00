//! Shared fixtures for in-memory board tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryRemoteStore,
    domain::{Status, TaskId},
    ports::TaskRecord,
    services::BoardService,
};
use mockable::DefaultClock;

/// Service type used by in-memory integration tests.
pub type TestService = BoardService<InMemoryRemoteStore, DefaultClock>;

/// A board service and a handle on the store it writes to.
pub struct Harness {
    pub remote: Arc<InMemoryRemoteStore>,
    pub service: TestService,
}

impl Harness {
    /// Creates a second view over the same remote store.
    pub fn second_view(&self) -> TestService {
        BoardService::new(Arc::clone(&self.remote), Arc::new(DefaultClock))
    }
}

#[fixture]
pub fn harness() -> Harness {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let service = BoardService::new(Arc::clone(&remote), Arc::new(DefaultClock));
    Harness { remote, service }
}

/// Seeds a task row with a fixed identifier.
pub fn seed(remote: &InMemoryRemoteStore, id: &str, content: &str, status: Status) {
    remote.seed_task(TaskRecord {
        id: id.to_owned(),
        content: content.to_owned(),
        status: status.as_str().to_owned(),
        priority: "normal".to_owned(),
    });
}

pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Contents of the tasks in the column for `status`, in display order.
pub fn contents(service: &TestService, status: Status) -> Vec<String> {
    service
        .store()
        .board()
        .column(status)
        .tasks()
        .iter()
        .map(|task| task.content().as_str().to_owned())
        .collect()
}
