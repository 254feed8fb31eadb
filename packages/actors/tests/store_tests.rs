use std::time::Duration;

use assert_matches::assert_matches;
use chrono::Utc;
use monitor_core::{ConnectionStatus, GroupConfig, GroupedView, Job, QueueSnapshot, StoreEvent};
use tokio::sync::broadcast;

use actors::{start_store, ActorRef, StoreMessage};

async fn view_of(store: &ActorRef<StoreMessage>) -> GroupedView {
    let (tx, rx) = actors::concurrency::oneshot();
    store
        .send_message(StoreMessage::GetView { reply: tx.into() })
        .expect("store reachable");
    rx.await.expect("store replies")
}

async fn connection_of(store: &ActorRef<StoreMessage>) -> ConnectionStatus {
    let (tx, rx) = actors::concurrency::oneshot();
    store
        .send_message(StoreMessage::GetConnection { reply: tx.into() })
        .expect("store reachable");
    rx.await.expect("store replies")
}

fn snapshot(jobs: Vec<Job>) -> Box<QueueSnapshot> {
    Box::new(QueueSnapshot::new(Utc::now(), jobs))
}

#[tokio::test]
async fn snapshot_replaces_prior_state() {
    let (store, handle) = start_store(GroupConfig::default(), None)
        .await
        .expect("store starts");

    store
        .send_message(StoreMessage::ApplySnapshot(snapshot(vec![
            Job::new("a.Job", "pending", 3),
            Job::new("b.Job", "running", 1),
        ])))
        .expect("send");

    let view = view_of(&store).await;
    assert_eq!(view.total, 4);
    assert_eq!(view.count("pending"), 3);

    // The next snapshot replaces everything; nothing is merged.
    store
        .send_message(StoreMessage::ApplySnapshot(snapshot(vec![Job::new(
            "c.Job", "error", 2,
        )])))
        .expect("send");

    let view = view_of(&store).await;
    assert_eq!(view.total, 2);
    assert_eq!(view.count("pending"), 0);
    assert_eq!(view.group("stopped").map(|g| g.total), Some(2));

    store.send_message(StoreMessage::Shutdown).expect("send");
    handle.await.expect("clean stop");
}

#[tokio::test]
async fn empty_snapshot_clears_the_view() {
    let (store, handle) = start_store(GroupConfig::default(), None)
        .await
        .expect("store starts");

    store
        .send_message(StoreMessage::ApplySnapshot(snapshot(vec![Job::new(
            "a.Job", "pending", 5,
        )])))
        .expect("send");
    store
        .send_message(StoreMessage::ApplySnapshot(snapshot(vec![])))
        .expect("send");

    let view = view_of(&store).await;
    assert_eq!(view.total, 0);
    assert!(view.counts.is_empty());

    store.send_message(StoreMessage::Shutdown).expect("send");
    handle.await.expect("clean stop");
}

#[tokio::test]
async fn connection_flags_follow_socket_lifecycle() {
    let (store, handle) = start_store(GroupConfig::default(), None)
        .await
        .expect("store starts");

    assert_eq!(connection_of(&store).await, ConnectionStatus::default());

    store.send_message(StoreMessage::SocketOpened).expect("send");
    let status = connection_of(&store).await;
    assert!(status.connected);
    assert!(status.is_healthy());

    store
        .send_message(StoreMessage::SocketClosed { error: true })
        .expect("send");
    store.send_message(StoreMessage::ReconnectFailed).expect("send");
    let status = connection_of(&store).await;
    assert!(!status.connected);
    assert!(status.reconnect_error);

    // A successful reconnect resets the error flag.
    store.send_message(StoreMessage::SocketOpened).expect("send");
    let status = connection_of(&store).await;
    assert!(status.connected);
    assert!(!status.reconnect_error);

    store.send_message(StoreMessage::Shutdown).expect("send");
    handle.await.expect("clean stop");
}

#[tokio::test]
async fn events_are_broadcast() {
    let (event_tx, mut event_rx) = broadcast::channel(16);
    let (store, handle) = start_store(GroupConfig::default(), Some(event_tx))
        .await
        .expect("store starts");

    store.send_message(StoreMessage::SocketOpened).expect("send");
    store
        .send_message(StoreMessage::ApplySnapshot(snapshot(vec![Job::new(
            "a.Job", "running", 7,
        )])))
        .expect("send");

    let first = tokio::time::timeout(Duration::from_secs(5), event_rx.recv())
        .await
        .expect("event within deadline")
        .expect("channel open");
    assert_matches!(first, StoreEvent::Connected { .. });

    let second = tokio::time::timeout(Duration::from_secs(5), event_rx.recv())
        .await
        .expect("event within deadline")
        .expect("channel open");
    assert_matches!(second, StoreEvent::SnapshotApplied { total_jobs: 7, .. });

    store.send_message(StoreMessage::Shutdown).expect("send");
    handle.await.expect("clean stop");
}
