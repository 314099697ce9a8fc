//! Batch disconnect scenarios

use crate::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use vq_core::PeerId;
use vq_engine::Task;

#[tokio::test]
async fn batch_disconnect_gives_every_peer_the_visibility_guarantee() {
    let manager = manager();
    let ids = [PeerId::new("a"), PeerId::new("b"), PeerId::new("c")];
    let transports: Vec<_> = ids.iter().map(|id| register(&manager, &id.0)).collect();

    // One probe per peer, checking at run time that its peer is gone
    let mut observed = HashMap::new();
    for id in &ids {
        let absent = Arc::new(AtomicBool::new(false));
        observed.insert(id.clone(), Arc::clone(&absent));
        let table = Arc::clone(manager.peers());
        let probe_id = id.clone();
        manager
            .queue()
            .enqueue(Task::new(format!("probe-{}", id), id.clone(), async move {
                absent.store(table.get(&probe_id).is_none(), Ordering::SeqCst);
                Ok(())
            }));
    }

    manager.disconnect_many(&ids).await.unwrap();

    for (id, absent) in &observed {
        assert!(
            absent.load(Ordering::SeqCst),
            "probe for {} saw the peer still present",
            id
        );
    }
    for transport in &transports {
        assert_eq!(transport.close_count(), 1);
    }
    // Coalesced: one drain pass for the whole batch
    assert_eq!(manager.queue().completed_drains(), 1);
    assert!(manager.connected_peers().is_empty());
}

#[tokio::test]
async fn batch_disconnect_matches_sequential_disconnects() {
    // Same scenario run both ways must end in the same observable state
    let batch = manager();
    let sequential = manager();
    let ids = [PeerId::new("a"), PeerId::new("b")];

    for m in [&batch, &sequential] {
        for id in &ids {
            register(m, &id.0);
            m.enqueue_validation(id.clone(), |_h| async { Ok(()) });
        }
    }

    batch.disconnect_many(&ids).await.unwrap();
    for id in &ids {
        sequential.disconnect(id).await.unwrap();
    }

    assert!(batch.connected_peers().is_empty());
    assert!(sequential.connected_peers().is_empty());
    assert!(batch.queue().is_empty());
    assert!(sequential.queue().is_empty());
    assert_eq!(batch.queue().completed_drains(), 1);
}
