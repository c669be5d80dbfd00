//! Kanban board state synchronisation.
//!
//! The board keeps a column-partitioned view model of tasks in memory and
//! reconciles it with a remote store after each confirmed remote call. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The view-model state holder in [`store`]
//! - Reconciliation operations in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
