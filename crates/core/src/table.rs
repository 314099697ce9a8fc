// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Peer table: the canonical id to handle mapping
//!
//! All access goes through one mutex, so a removal is totally ordered with
//! respect to every later lookup: once `remove` returns, no `get` can
//! observe the peer again.

use crate::error::TableError;
use crate::peer::{PeerHandle, PeerId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mapping from peer id to peer handle
#[derive(Default)]
pub struct PeerTable {
    peers: Mutex<HashMap<PeerId, Arc<PeerHandle>>>,
}

impl PeerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handle under its id
    ///
    /// Registering an id that is already present is a programmer error and
    /// is reported to the caller.
    pub fn register(&self, handle: Arc<PeerHandle>) -> Result<(), TableError> {
        let mut peers = self.peers.lock().unwrap_or_else(|e| e.into_inner());
        let id = handle.id().clone();
        if peers.contains_key(&id) {
            return Err(TableError::DuplicatePeer(id));
        }
        peers.insert(id, handle);
        Ok(())
    }

    /// Remove and return the handle for `id`
    ///
    /// Removing an absent id returns `None`; disconnect of an already-gone
    /// peer is a normal race outcome, not an error.
    pub fn remove(&self, id: &PeerId) -> Option<Arc<PeerHandle>> {
        self.peers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id)
    }

    /// Look up the handle for `id`
    ///
    /// Absence is a normal, expected condition that callers must handle.
    pub fn get(&self, id: &PeerId) -> Option<Arc<PeerHandle>> {
        self.peers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }

    /// Check whether `id` is registered
    pub fn contains(&self, id: &PeerId) -> bool {
        self.peers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(id)
    }

    /// Number of registered peers
    pub fn len(&self) -> usize {
        self.peers.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.peers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }

    /// Ids of all registered peers
    pub fn peer_ids(&self) -> Vec<PeerId> {
        self.peers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
