//! Taskboard: kanban board view model synchronised with a hosted database.
//!
//! This crate holds the column-partitioned task list of a kanban board in
//! memory and keeps it consistent with two remote tables, `tasks` and
//! `comments`. Every mutation is confirmed by the remote store before the
//! local snapshot changes.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, comments, columns and the board value
//! - **Ports**: The remote store contract and its row schemas
//! - **Adapters**: In-memory and `PostgreSQL` remote stores
//! - **Services**: Reconciliation operations over the view-model store
//!
//! # Modules
//!
//! - [`board`]: Board domain, view model and reconciliation
//! - [`config`]: Column layout and database configuration

pub mod board;
pub mod config;
