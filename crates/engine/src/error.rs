// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the validation queue engine

use thiserror::Error;
use vq_core::{PeerId, TaskId};

/// Error returned by an individual validation task
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct TaskError(String);

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Record of a task that failed during a drain pass
#[derive(Clone, Debug)]
pub struct TaskFailure {
    pub task_id: TaskId,
    pub peer: PeerId,
    pub message: String,
}

/// Errors from the drain barrier
///
/// A failing task never corrupts queue ordering; it is recorded and
/// surfaced to the caller whose pass executed it.
#[derive(Debug, Error)]
pub enum DrainError {
    #[error("{} validation task(s) failed during drain", .0.len())]
    TasksFailed(Vec<TaskFailure>),
}
