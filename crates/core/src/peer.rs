// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Peer identity and handle types
//!
//! A peer handle tracks one external connection with a one-way liveness
//! flag: once invalidated, a peer never comes back.

use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Unique identifier for a peer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerId(pub String);

impl PeerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked peer with a monotonic liveness flag
pub struct PeerHandle {
    id: PeerId,
    alive: AtomicBool,
    transport: Arc<dyn Transport>,
}

impl PeerHandle {
    pub fn new(id: PeerId, transport: Arc<dyn Transport>) -> Self {
        Self {
            id,
            alive: AtomicBool::new(true),
            transport,
        }
    }

    pub fn id(&self) -> &PeerId {
        &self.id
    }

    /// Pure read of the liveness flag
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the peer dead and close its transport
    ///
    /// Idempotent: only the first caller closes the transport, no matter
    /// how many callers race here. Close failures are logged and swallowed;
    /// teardown always succeeds from the caller's point of view.
    pub async fn invalidate(&self) {
        if !self.alive.swap(false, Ordering::AcqRel) {
            return;
        }
        match self.transport.close().await {
            Ok(()) => info!(peer = %self.id, "peer transport closed"),
            Err(e) => warn!(peer = %self.id, error = %e, "peer transport close failed"),
        }
    }
}

impl fmt::Debug for PeerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerHandle")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
#[path = "peer_tests.rs"]
mod tests;
