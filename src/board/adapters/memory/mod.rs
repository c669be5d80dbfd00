//! In-memory adapters for board persistence.

mod remote_store;

pub use remote_store::InMemoryRemoteStore;
