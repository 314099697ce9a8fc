// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queued validation task representation

use crate::error::TaskError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use vq_core::{PeerId, TaskId};

/// Result of running a validation task
pub type TaskResult = Result<(), TaskError>;

type BoxedWork = Pin<Box<dyn Future<Output = TaskResult> + Send + 'static>>;

/// A deferred unit of validation work
///
/// Carries only the data it needs: an id for log correlation, the peer it
/// references, and the boxed work itself. Running consumes the task, so a
/// task can never execute twice.
pub struct Task {
    id: TaskId,
    peer: PeerId,
    work: BoxedWork,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        peer: PeerId,
        work: impl Future<Output = TaskResult> + Send + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            peer,
            work: Box::pin(work),
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// The peer this task references
    pub fn peer(&self) -> &PeerId {
        &self.peer
    }

    pub(crate) async fn run(self) -> TaskResult {
        self.work.await
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("peer", &self.peer)
            .finish()
    }
}
