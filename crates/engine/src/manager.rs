// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Peer manager: the disconnect-and-drain protocol
//!
//! Owns the peer table and the validation queue and sequences the composite
//! operations: register a peer, queue validation work against it, and
//! disconnect. The correctness boundary of disconnect is the atomic removal
//! from the table; the drain that follows guarantees no task enqueued
//! beforehand is still in flight when disconnect returns.

use crate::error::DrainError;
use crate::queue::{QueueConfig, ValidationQueue};
use crate::task::{Task, TaskResult};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};
use vq_core::{IdGen, PeerHandle, PeerId, PeerTable, TableError, TaskId, Transport, UuidIdGen};

/// Coordinates the peer table and the validation queue
pub struct PeerManager<I: IdGen = UuidIdGen> {
    peers: Arc<PeerTable>,
    queue: Arc<ValidationQueue>,
    id_gen: I,
}

impl PeerManager<UuidIdGen> {
    pub fn new(config: QueueConfig) -> Self {
        Self::with_id_gen(config, UuidIdGen)
    }
}

impl Default for PeerManager<UuidIdGen> {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

impl<I: IdGen> PeerManager<I> {
    /// Create a manager with a specific id generator
    /// (tests use `SequentialIdGen`)
    pub fn with_id_gen(config: QueueConfig, id_gen: I) -> Self {
        Self {
            peers: Arc::new(PeerTable::new()),
            queue: Arc::new(ValidationQueue::new(config)),
            id_gen,
        }
    }

    /// The underlying peer table
    pub fn peers(&self) -> &Arc<PeerTable> {
        &self.peers
    }

    /// The underlying validation queue
    pub fn queue(&self) -> &Arc<ValidationQueue> {
        &self.queue
    }

    /// Track a new peer
    pub fn register_peer(
        &self,
        id: PeerId,
        transport: Arc<dyn Transport>,
    ) -> Result<(), TableError> {
        self.peers
            .register(Arc::new(PeerHandle::new(id.clone(), transport)))?;
        info!(peer = %id, "peer registered");
        Ok(())
    }

    /// Ids of all currently tracked peers
    pub fn connected_peers(&self) -> Vec<PeerId> {
        self.peers.peer_ids()
    }

    /// Queue validation work referencing `peer`
    ///
    /// The work only runs if the peer is still present and alive when the
    /// task executes; otherwise the task logs and skips. Returns the id
    /// assigned to the queued task.
    pub fn enqueue_validation<F, Fut>(&self, peer: PeerId, work: F) -> TaskId
    where
        F: FnOnce(Arc<PeerHandle>) -> Fut + Send + 'static,
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        let task_id = self.id_gen.next();
        let table = Arc::clone(&self.peers);
        let task_peer = peer.clone();
        let task = Task::new(task_id.clone(), peer, async move {
            match table.get(&task_peer) {
                Some(handle) if handle.is_alive() => work(handle).await,
                _ => {
                    debug!(peer = %task_peer, "peer gone, skipping validation");
                    Ok(())
                }
            }
        });
        self.queue.enqueue(task);
        task_id
    }

    /// Disconnect a peer and wait for the validation queue to drain
    ///
    /// The handle is invalidated first, then removed from the table, both
    /// before the drain; any task that runs during the resulting pass
    /// observes the peer as already gone. Returns only after every
    /// previously queued task has completed. Disconnecting an unknown peer
    /// is a no-op.
    pub async fn disconnect(&self, id: &PeerId) -> Result<(), DrainError> {
        let Some(handle) = self.peers.get(id) else {
            debug!(peer = %id, "disconnect of unknown peer, nothing to do");
            return Ok(());
        };
        handle.invalidate().await;
        self.peers.remove(id);
        self.queue.drain().await?;
        info!(peer = %id, "peer disconnected and queue drained");
        Ok(())
    }

    /// Disconnect several peers with a single drain pass
    ///
    /// All invalidations and removals happen first; one drain then gives
    /// every queued task the same visibility guarantee per-peer disconnects
    /// would, without N separate barrier synchronizations.
    pub async fn disconnect_many(&self, ids: &[PeerId]) -> Result<(), DrainError> {
        let mut removed = 0usize;
        for id in ids {
            if let Some(handle) = self.peers.get(id) {
                handle.invalidate().await;
                self.peers.remove(id);
                removed += 1;
            }
        }
        debug!(removed, requested = ids.len(), "peers removed, draining queue");
        self.queue.drain().await?;
        info!(removed, "peers disconnected and queue drained");
        Ok(())
    }

    /// Disconnect without the drain barrier: the use-after-invalidate race
    ///
    /// Test-only demonstration of the bug class the barrier prevents. After
    /// this returns, tasks enqueued before the call may still be pending or
    /// mid-execution while the transport is already closed. Not part of the
    /// production API.
    #[cfg(any(test, feature = "test-support"))]
    pub async fn disconnect_skip_drain(&self, id: &PeerId) {
        if let Some(handle) = self.peers.get(id) {
            handle.invalidate().await;
            self.peers.remove(id);
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
