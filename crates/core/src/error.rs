// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for peer table operations

use crate::peer::PeerId;
use thiserror::Error;

/// Errors from peer table operations
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate peer: {0}")]
    DuplicatePeer(PeerId),
}
