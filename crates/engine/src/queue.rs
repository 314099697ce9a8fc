// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation task queue with drain barrier
//!
//! FIFO, unbounded, single consumer. `enqueue` never blocks; `drain`
//! returns only once every task that was queued at the time of the call
//! (and any task enqueued while the pass runs) has completed. At most one
//! drain pass executes at a time; concurrent callers suspend on a notifier
//! and re-check instead of starting a second consumer.

use crate::error::{DrainError, TaskFailure};
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;
use tracing::{debug, warn};

/// What a drain pass does with a failing task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Keep draining, report all failures together once the queue is empty
    ContinueAndAggregate,
    /// Stop at the first failure, leaving the remainder queued
    FailFast,
}

/// Queue configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Name identifying this queue (used in logs)
    pub name: String,
    /// Failure handling for drain passes
    pub failure_policy: FailurePolicy,
}

impl QueueConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure_policy: FailurePolicy::ContinueAndAggregate,
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new("validation")
    }
}

struct QueueState {
    pending: VecDeque<Task>,
    draining: bool,
}

/// FIFO validation queue with a drain barrier
pub struct ValidationQueue {
    config: QueueConfig,
    state: Mutex<QueueState>,
    /// Signalled when a drain pass finishes
    drained: Notify,
    /// Completed drain passes
    passes: AtomicU64,
}

impl ValidationQueue {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            config,
            state: Mutex::new(QueueState {
                pending: VecDeque::new(),
                draining: false,
            }),
            drained: Notify::new(),
            passes: AtomicU64::new(0),
        }
    }

    /// Append a task to the tail; never blocks, never fails
    pub fn enqueue(&self, task: Task) {
        debug!(
            queue = %self.config.name,
            task_id = %task.id(),
            peer = %task.peer(),
            "task enqueued"
        );
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.pending.push_back(task);
    }

    /// Number of tasks waiting
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pending
            .len()
    }

    /// Check if the queue has no pending tasks
    pub fn is_empty(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pending
            .is_empty()
    }

    /// Whether a drain pass is currently running
    pub fn is_draining(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .draining
    }

    /// Number of drain passes that have run to completion
    pub fn completed_drains(&self) -> u64 {
        self.passes.load(Ordering::SeqCst)
    }

    /// Block until every currently queued task has completed
    ///
    /// If a pass is already running, the caller suspends until it finishes
    /// and then re-checks; it only returns once it has observed "no pass in
    /// progress" and "queue empty" in one atomic look at the state, or has
    /// run a pass itself.
    pub async fn drain(&self) -> Result<(), DrainError> {
        loop {
            let wait = self.drained.notified();
            tokio::pin!(wait);
            // Register before checking state so a pass finishing in between
            // cannot be missed.
            wait.as_mut().enable();

            let first = {
                let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
                if state.draining {
                    None
                } else if let Some(task) = state.pending.pop_front() {
                    state.draining = true;
                    Some(task)
                } else {
                    return Ok(());
                }
            };

            match first {
                Some(task) => return self.run_pass(task).await,
                None => wait.await,
            }
        }
    }

    /// Run one drain pass, starting from `first`
    ///
    /// Keeps consuming while the queue is non-empty, so tasks enqueued by
    /// running tasks are included in the same pass.
    async fn run_pass(&self, first: Task) -> Result<(), DrainError> {
        let mut failures = Vec::new();
        let mut next = Some(first);

        while let Some(task) = next.take() {
            let task_id = task.id().clone();
            let peer = task.peer().clone();
            debug!(
                queue = %self.config.name,
                task_id = %task_id,
                peer = %peer,
                "running validation task"
            );

            if let Err(e) = task.run().await {
                warn!(
                    queue = %self.config.name,
                    task_id = %task_id,
                    peer = %peer,
                    error = %e,
                    "validation task failed"
                );
                failures.push(TaskFailure {
                    task_id,
                    peer,
                    message: e.to_string(),
                });
                if self.config.failure_policy == FailurePolicy::FailFast {
                    break;
                }
            }

            next = self
                .state
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pending
                .pop_front();
        }

        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.draining = false;
        }
        self.passes.fetch_add(1, Ordering::SeqCst);
        self.drained.notify_waiters();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DrainError::TasksFailed(failures))
        }
    }
}

impl Default for ValidationQueue {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
