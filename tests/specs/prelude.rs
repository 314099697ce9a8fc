//! Shared helpers for scenario specs

use std::sync::Arc;
use vq_core::{FakeTransport, PeerId, SequentialIdGen};
use vq_engine::{PeerManager, QueueConfig};

pub fn manager() -> PeerManager<SequentialIdGen> {
    PeerManager::with_id_gen(QueueConfig::new("specs"), SequentialIdGen::new("task"))
}

pub fn register(manager: &PeerManager<SequentialIdGen>, id: &str) -> FakeTransport {
    let transport = FakeTransport::new();
    manager
        .register_peer(PeerId::new(id), Arc::new(transport.clone()))
        .unwrap();
    transport
}
