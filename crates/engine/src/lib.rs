// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vq validation queue engine
//!
//! The FIFO validation task queue with its drain barrier, and the peer
//! manager implementing the disconnect-and-drain protocol.

pub mod error;
pub mod manager;
pub mod queue;
pub mod task;

pub use error::{DrainError, TaskError, TaskFailure};
pub use manager::PeerManager;
pub use queue::{FailurePolicy, QueueConfig, ValidationQueue};
pub use task::{Task, TaskResult};
