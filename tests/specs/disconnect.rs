//! Disconnect-and-drain scenarios

use crate::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use vq_core::PeerId;
use vq_engine::Task;

#[tokio::test]
async fn pending_validations_see_disconnected_peer_as_gone() {
    let manager = manager();
    let transport = register(&manager, "peer-1");

    // Two validation tasks referencing the peer, queued before disconnect
    let ran = Arc::new(AtomicUsize::new(0));
    for _ in 0..2 {
        let ran = Arc::clone(&ran);
        manager.enqueue_validation(PeerId::new("peer-1"), move |_handle| async move {
            ran.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
    }

    manager.disconnect(&PeerId::new("peer-1")).await.unwrap();

    // Both tasks executed during the drain, observed the peer absent, and
    // skipped their work; nothing errored
    assert_eq!(ran.load(Ordering::SeqCst), 0);
    assert!(manager.queue().is_empty());
    assert!(manager.connected_peers().is_empty());
    assert_eq!(transport.close_count(), 1);
}

#[tokio::test]
async fn disconnect_blocks_until_delayed_task_completes() {
    let manager = manager();
    register(&manager, "peer-1");

    let done = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&done);
    manager
        .queue()
        .enqueue(Task::new("delayed", PeerId::new("peer-1"), async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }));

    // Start the pass so the delayed task is in flight, then disconnect
    // concurrently
    let queue = Arc::clone(manager.queue());
    let drainer = tokio::spawn(async move { queue.drain().await });
    tokio::time::sleep(Duration::from_millis(20)).await;

    manager.disconnect(&PeerId::new("peer-1")).await.unwrap();

    assert!(
        done.load(Ordering::SeqCst),
        "disconnect returned before the in-flight task finished"
    );
    drainer.await.unwrap().unwrap();
}

#[tokio::test]
async fn repeated_and_unknown_disconnects_are_noops() {
    let manager = manager();
    let transport = register(&manager, "peer-1");

    manager.disconnect(&PeerId::new("peer-1")).await.unwrap();
    manager.disconnect(&PeerId::new("peer-1")).await.unwrap();
    manager.disconnect(&PeerId::new("never-seen")).await.unwrap();

    assert_eq!(transport.close_count(), 1);
    assert!(manager.connected_peers().is_empty());
}
