//! Shared builders and mocks for board unit tests.

use crate::board::{
    domain::{Board, BoardLayout, Comment, CommentId, Content, Priority, Status, Task, TaskId},
    ports::{
        CommentRecord, NewCommentRecord, NewTaskRecord, RemoteResult, RemoteStore, TaskPatch,
        TaskRecord,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;

mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteStore for Remote {
        async fn select_tasks(&self) -> RemoteResult<Vec<TaskRecord>>;
        async fn select_comments(&self) -> RemoteResult<Vec<CommentRecord>>;
        async fn insert_task(&self, row: NewTaskRecord) -> RemoteResult<TaskRecord>;
        async fn insert_comment(&self, row: NewCommentRecord) -> RemoteResult<CommentRecord>;
        async fn update_task(&self, id: TaskId, patch: TaskPatch) -> RemoteResult<()>;
        async fn delete_task(&self, id: TaskId) -> RemoteResult<()>;
    }
}

pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

pub fn task(id: &str, content: &str, status: Status) -> Task {
    Task::new(
        task_id(id),
        Content::new(content).expect("valid content"),
        status,
        Priority::Normal,
    )
}

pub fn task_row(id: &str, content: &str, status: &str, priority: &str) -> TaskRecord {
    TaskRecord {
        id: id.to_owned(),
        content: content.to_owned(),
        status: status.to_owned(),
        priority: priority.to_owned(),
    }
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0)
        .single()
        .expect("valid timestamp")
}

pub fn comment_row(id: &str, task: &str, content: &str, seconds: i64) -> CommentRecord {
    CommentRecord {
        id: id.to_owned(),
        content: content.to_owned(),
        task_id: task.to_owned(),
        timestamp: at(seconds),
    }
}

pub fn comment(id: &str, task: &str, content: &str, seconds: i64) -> Comment {
    Comment::new(
        CommentId::new(id).expect("valid comment id"),
        task_id(task),
        Content::new(content).expect("valid content"),
        at(seconds),
    )
}

/// Board with `t1`, `t2` in start, `t3` in progress and `t4` done.
pub fn sample_board() -> Board {
    Board::from_parts(
        &BoardLayout::default(),
        vec![
            task("t1", "Buy milk", Status::Start),
            task("t2", "Write report", Status::Start),
            task("t3", "Fix bike", Status::InProgress),
            task("t4", "File taxes", Status::Done),
        ],
        Vec::new(),
    )
}

/// Identifiers of the tasks in the column for `status`, in order.
pub fn column_ids(board: &Board, status: Status) -> Vec<String> {
    board
        .column(status)
        .tasks()
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect()
}
