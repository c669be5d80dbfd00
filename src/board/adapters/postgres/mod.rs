//! `PostgreSQL` adapter for the board's remote store.
//!
//! Expects the following tables:
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id UUID PRIMARY KEY,
//!     content TEXT NOT NULL CHECK (btrim(content) <> ''),
//!     status VARCHAR(20) NOT NULL,
//!     priority VARCHAR(20) NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE comments (
//!     id UUID PRIMARY KEY,
//!     content TEXT NOT NULL CHECK (btrim(content) <> ''),
//!     task_id UUID NOT NULL REFERENCES tasks (id) ON DELETE CASCADE,
//!     timestamp TIMESTAMPTZ NOT NULL
//! );
//! ```

mod models;
mod remote_store;
mod schema;

pub use remote_store::{BoardPgPool, PostgresRemoteStore};
