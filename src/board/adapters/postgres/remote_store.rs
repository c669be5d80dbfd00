//! `PostgreSQL` implementation of the board's remote store.

use super::{
    models::{CommentRow, NewCommentRow, NewTaskRow, TaskChangeset, TaskRow},
    schema::{comments, tasks},
};
use crate::{
    board::{
        domain::TaskId,
        ports::{
            CommentRecord, NewCommentRecord, NewTaskRecord, RemoteError, RemoteResult,
            RemoteStore, Table, TaskPatch, TaskRecord,
        },
    },
    config::PostgresConfig,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed remote store.
#[derive(Debug, Clone)]
pub struct PostgresRemoteStore {
    pool: BoardPgPool,
}

impl PostgresRemoteStore {
    /// Creates a store from an existing connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] when the pool cannot be built.
    pub fn connect(config: &PostgresConfig) -> RemoteResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url());
        let pool = Pool::builder()
            .max_size(config.max_pool_size())
            .build(manager)
            .map_err(RemoteError::transport)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> RemoteResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RemoteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RemoteError::transport)?;
            f(&mut connection)
        })
        .await
        .map_err(RemoteError::transport)?
    }
}

#[async_trait]
impl RemoteStore for PostgresRemoteStore {
    async fn select_tasks(&self) -> RemoteResult<Vec<TaskRecord>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(|err| map_diesel_error(Table::Tasks, err))?;
            Ok(rows.into_iter().map(TaskRecord::from).collect())
        })
        .await
    }

    async fn select_comments(&self) -> RemoteResult<Vec<CommentRecord>> {
        self.run_blocking(|connection| {
            let rows = comments::table
                .order(comments::timestamp.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(|err| map_diesel_error(Table::Comments, err))?;
            Ok(rows.into_iter().map(CommentRecord::from).collect())
        })
        .await
    }

    async fn insert_task(&self, row: NewTaskRecord) -> RemoteResult<TaskRecord> {
        let new_row = NewTaskRow {
            id: Uuid::new_v4(),
            content: row.content.into(),
            status: row.status.as_str().to_owned(),
            priority: row.priority.as_str().to_owned(),
        };
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map(TaskRecord::from)
                .map_err(|err| map_diesel_error(Table::Tasks, err))
        })
        .await
    }

    async fn insert_comment(&self, row: NewCommentRecord) -> RemoteResult<CommentRecord> {
        let task_id = Uuid::parse_str(row.task_id.as_str()).map_err(|_| {
            RemoteError::constraint(
                Table::Comments,
                format!("task {} does not exist", row.task_id),
            )
        })?;
        let new_row = NewCommentRow {
            id: Uuid::new_v4(),
            content: row.content.into(),
            task_id,
            timestamp: row.timestamp,
        };
        self.run_blocking(move |connection| {
            diesel::insert_into(comments::table)
                .values(&new_row)
                .returning(CommentRow::as_returning())
                .get_result::<CommentRow>(connection)
                .map(CommentRecord::from)
                .map_err(|err| map_diesel_error(Table::Comments, err))
        })
        .await
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> RemoteResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let uuid = parse_task_id(&id)?;
        let changeset = TaskChangeset {
            status: patch.status.map(|status| status.as_str().to_owned()),
            priority: patch.priority.map(|priority| priority.as_str().to_owned()),
        };
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(uuid))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| map_diesel_error(Table::Tasks, err))?;
            ensure_affected(affected, &id)
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> RemoteResult<()> {
        let uuid = parse_task_id(&id)?;
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(uuid))
                .execute(connection)
                .map_err(|err| map_diesel_error(Table::Tasks, err))?;
            ensure_affected(affected, &id)
        })
        .await
    }
}

/// Identifiers that are not UUIDs cannot name a stored row.
fn parse_task_id(id: &TaskId) -> RemoteResult<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| RemoteError::not_found(Table::Tasks, id.as_str()))
}

fn ensure_affected(affected: usize, id: &TaskId) -> RemoteResult<()> {
    if affected == 0 {
        return Err(RemoteError::not_found(Table::Tasks, id.as_str()));
    }
    Ok(())
}

fn map_diesel_error(table: Table, err: DieselError) -> RemoteError {
    match err {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation,
            ref info,
        ) => RemoteError::constraint(table, info.message()),
        other => RemoteError::transport(other),
    }
}
