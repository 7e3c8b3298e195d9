//! Bulk intents: each item succeeds or fails on its own.

mod support;

use pretty_assertions::assert_eq;

use support::{item, loaded, local, Call};
use todo_engine::{BatchReport, NoticeKind};

#[tokio::test(start_paused = true)]
async fn test_clear_completed_survives_partial_failure() {
    local(async {
        let (engine, remote) =
            loaded(vec![item(1, "A", true), item(2, "B", false), item(3, "C", true)]).await;
        remote.fail_delete(1);

        let report = engine.clear_completed().await;

        assert_eq!(
            report,
            BatchReport {
                succeeded: vec![3],
                failed: vec![1],
            }
        );
        assert_eq!(engine.items(), vec![item(1, "A", true), item(2, "B", false)]);
        assert!(engine.in_flight_ids().is_empty());
        assert_eq!(engine.current_notice(), Some(NoticeKind::Delete));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_bulk_complete_only_touches_active_items() {
    local(async {
        let (engine, remote) =
            loaded(vec![item(1, "A", false), item(2, "B", true), item(3, "C", false)]).await;

        let report = engine.bulk_complete().await;

        assert!(report.is_clean());
        assert_eq!(report.succeeded, vec![1, 3]);
        assert!(engine.items().iter().all(|i| i.completed));
        let updated: Vec<_> = remote
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(id, _) => Some(id),
                _ => None,
            })
            .collect();
        assert_eq!(updated, vec![1, 3]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_bulk_activate_continues_after_failed_item() {
    local(async {
        let (engine, remote) =
            loaded(vec![item(1, "A", true), item(2, "B", true), item(3, "C", true)]).await;
        remote.fail_update(2);

        let report = engine.bulk_activate().await;

        assert_eq!(report.succeeded, vec![1, 3]);
        assert_eq!(report.failed, vec![2]);
        assert_eq!(
            engine.items(),
            vec![item(1, "A", false), item(2, "B", true), item(3, "C", false)]
        );
        assert_eq!(engine.current_notice(), Some(NoticeKind::Update));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_toggle_all_picks_direction_from_list() {
    local(async {
        let (engine, _remote) = loaded(vec![item(1, "A", true), item(2, "B", false)]).await;

        engine.toggle_all().await;
        assert!(engine.summary().all_completed);

        engine.toggle_all().await;
        assert!(engine.items().iter().all(|i| !i.completed));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_bulk_on_empty_list_is_a_no_op() {
    local(async {
        let (engine, remote) = loaded(vec![]).await;

        assert_eq!(engine.bulk_complete().await, BatchReport::default());
        assert_eq!(engine.clear_completed().await, BatchReport::default());
        assert_eq!(remote.calls(), vec![Call::List]);
    })
    .await;
}
