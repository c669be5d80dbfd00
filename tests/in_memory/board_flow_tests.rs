//! End-to-end reconciliation flows against the in-memory remote store.

use super::helpers::{Harness, contents, harness, seed, task_id};
use std::collections::HashSet;
use taskboard::board::{
    domain::{Priority, Status},
    services::{DragEnd, DragLocation, Reconciliation, SkipReason},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_places_every_remote_task_exactly_once(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;
    seed(&remote, "t1", "Buy milk", Status::Start);
    seed(&remote, "t2", "Fix bike", Status::InProgress);
    seed(&remote, "t3", "File taxes", Status::Done);
    seed(&remote, "t4", "Call mum", Status::Start);

    service.load().await.expect("load should succeed");

    let board = service.store().board();
    let ids: Vec<&str> = board.tasks().map(|task| task.id().as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(unique, HashSet::from(["t1", "t2", "t3", "t4"]));
    assert_eq!(contents(&service, Status::Start), vec!["Buy milk", "Call mum"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_survives_reload(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;

    service
        .create_task("Write report")
        .await
        .expect("create should succeed");

    let rows = remote.task_rows();
    assert_eq!(rows.len(), 1);
    let row = rows.first().expect("one row");
    assert_eq!(row.content, "Write report");
    assert_eq!(row.status, "start");
    assert_eq!(row.priority, "normal");

    service.load().await.expect("reload should succeed");
    assert_eq!(contents(&service, Status::Start), vec!["Write report"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_from_creation_to_deletion(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;
    service
        .create_task("Ship release")
        .await
        .expect("create should succeed");
    let id = service
        .store()
        .board()
        .tasks()
        .next()
        .map(|task| task.id().clone())
        .expect("task created");

    service
        .move_task(DragEnd::new(
            id.clone(),
            DragLocation::column(Status::Start, 0),
            DragLocation::column(Status::InProgress, 0),
        ))
        .await
        .expect("move should succeed");
    service
        .set_priority(&id, Priority::Immediate)
        .await
        .expect("reprioritize should succeed");
    service
        .move_task(DragEnd::new(
            id.clone(),
            DragLocation::column(Status::InProgress, 0),
            DragLocation::column(Status::Done, 0),
        ))
        .await
        .expect("move should succeed");

    let done = service.store().board().find_task(&id).expect("task present");
    assert_eq!(done.status(), Status::Done);
    assert_eq!(done.priority(), Priority::Immediate);
    let row = remote.task_rows().into_iter().next().expect("row present");
    assert_eq!(row.status, "done");
    assert_eq!(row.priority, "immediate");

    service.delete_task(&id).await.expect("delete should succeed");
    assert_eq!(service.store().board().task_count(), 0);
    assert!(remote.task_rows().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_attach_to_their_task_and_cascade_on_delete(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;
    seed(&remote, "t1", "Buy milk", Status::Done);
    service.load().await.expect("load should succeed");

    service.open_comments(task_id("t1"));
    service
        .add_comment("Looks good")
        .await
        .expect("comment should succeed");
    service.open_comments(task_id("t1"));
    service
        .add_comment("Merged")
        .await
        .expect("comment should succeed");

    let task = service
        .store()
        .board()
        .find_task(&task_id("t1"))
        .expect("task present");
    let thread: Vec<&str> = task
        .comments()
        .iter()
        .map(|comment| comment.content().as_str())
        .collect();
    assert_eq!(thread, vec!["Looks good", "Merged"]);
    assert_eq!(remote.comment_rows().len(), 2);

    service
        .delete_task(&task_id("t1"))
        .await
        .expect("delete should succeed");
    assert!(remote.comment_rows().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_on_deleted_task_is_rejected_remotely(harness: Harness) {
    let Harness {
        remote: _remote,
        mut service,
    } = harness;
    service.open_comments(task_id("ghost"));

    let result = service.add_comment("Anyone there?").await;

    assert!(result.is_err());
    assert_eq!(service.active_task(), Some(&task_id("ghost")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column_is_local_until_reload(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;
    seed(&remote, "t1", "Buy milk", Status::Start);
    seed(&remote, "t2", "Call mum", Status::Start);
    service.load().await.expect("load should succeed");

    let outcome = service
        .move_task(DragEnd::new(
            task_id("t2"),
            DragLocation::column(Status::Start, 1),
            DragLocation::column(Status::Start, 0),
        ))
        .await
        .expect("reorder should succeed");

    assert_eq!(outcome, Reconciliation::Applied);
    assert_eq!(contents(&service, Status::Start), vec!["Call mum", "Buy milk"]);

    service.load().await.expect("reload should succeed");
    assert_eq!(contents(&service, Status::Start), vec!["Buy milk", "Call mum"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_view_sees_changes_only_after_load(harness: Harness) {
    let mut other = harness.second_view();
    let Harness {
        remote: _remote,
        mut service,
    } = harness;

    service
        .create_task("Buy milk")
        .await
        .expect("create should succeed");
    assert_eq!(other.store().board().task_count(), 0);

    other.load().await.expect("load should succeed");
    assert_eq!(contents(&other, Status::Start), vec!["Buy milk"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn whitespace_task_never_reaches_the_store(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = harness;

    let outcome = service
        .create_task("   ")
        .await
        .expect("blank create is a no-op");

    assert_eq!(outcome, Reconciliation::Skipped(SkipReason::EmptyContent));
    assert!(remote.task_rows().is_empty());
}
