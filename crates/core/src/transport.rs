// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport teardown seam
//!
//! The only capability the coordinator needs from a peer's underlying
//! transport is an idempotent-safe close. Real socket types implement this
//! trait; tests use [`FakeTransport`].

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Teardown capability of a peer's underlying transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// Close the underlying connection
    async fn close(&self) -> io::Result<()>;
}

/// Fake transport for testing
///
/// Records close calls and can be configured to fail them.
#[derive(Clone, Default)]
pub struct FakeTransport {
    closes: Arc<AtomicUsize>,
    fail_close: Arc<AtomicBool>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `close` has been called
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Make every subsequent `close` call fail
    pub fn fail_closes(&self) {
        self.fail_close.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn close(&self) -> io::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "close failed"));
        }
        Ok(())
    }
}
