//! Remote failures are logged and leave the snapshot exactly as it was.

use super::helpers::{Harness, harness, seed, task_id};
use taskboard::board::{
    domain::{Priority, Status},
    ports::{RemoteError, Table},
    services::{BoardServiceError, DragEnd, DragLocation},
};
use rstest::rstest;

async fn loaded(harness: Harness) -> Harness {
    let Harness {
        remote,
        mut service,
    } = harness;
    seed(&remote, "t1", "Buy milk", Status::Start);
    seed(&remote, "t2", "File taxes", Status::Done);
    service.load().await.expect("load should succeed");
    Harness { remote, service }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_operation_fails_cleanly_while_unavailable(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = loaded(harness).await;
    remote.set_unavailable(true);
    service.open_comments(task_id("t1"));
    let before = service.store().clone();

    let results = vec![
        service.create_task("Write report").await,
        service
            .move_task(DragEnd::new(
                task_id("t1"),
                DragLocation::column(Status::Start, 0),
                DragLocation::column(Status::Done, 0),
            ))
            .await,
        service.set_priority(&task_id("t1"), Priority::Urgent).await,
        service.delete_task(&task_id("t2")).await,
        service.add_comment("Looks good").await,
        service.load().await,
    ];

    assert!(
        results
            .iter()
            .all(|result| matches!(result, Err(BoardServiceError::Remote(RemoteError::Transport(_)))))
    );
    assert_eq!(service.store(), &before);
    assert!(!service.is_loading());
    assert_eq!(remote.task_rows().len(), 2);

    remote.set_unavailable(false);
    service.load().await.expect("load should succeed once available");
    assert_eq!(service.store().board(), before.board());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_shot_failure_affects_only_the_next_call(harness: Harness) {
    let Harness {
        remote,
        mut service,
    } = loaded(harness).await;
    remote.fail_next(RemoteError::constraint(Table::Tasks, "content too long"));

    let first = service.create_task("Write report").await;
    let second = service.create_task("Write report").await;

    assert!(matches!(
        first,
        Err(BoardServiceError::Remote(RemoteError::Constraint { .. }))
    ));
    assert!(second.is_ok());
    assert_eq!(service.store().board().task_count(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_missing_row(harness: Harness) {
    let Harness {
        remote: _remote,
        mut service,
    } = loaded(harness).await;
    service
        .delete_task(&task_id("t2"))
        .await
        .expect("first delete should succeed");

    let result = service.delete_task(&task_id("t2")).await;

    assert!(matches!(
        result,
        Err(BoardServiceError::Remote(RemoteError::NotFound { .. }))
    ));
    assert_eq!(service.store().board().task_count(), 1);
}
