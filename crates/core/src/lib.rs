// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vq-core: Core library for the vq peer coordinator
//!
//! This crate provides:
//! - Peer identity and handle types with a monotonic liveness flag
//! - The peer table (id to handle mapping) with remove-and-invalidate
//! - The transport teardown seam consumed by the engine
//! - Task identity and id generation

pub mod error;
pub mod id;
pub mod peer;
pub mod table;
pub mod transport;

// Re-exports
pub use error::TableError;
pub use id::{IdGen, SequentialIdGen, TaskId, UuidIdGen};
pub use peer::{PeerHandle, PeerId};
pub use table::PeerTable;
pub use transport::{FakeTransport, Transport};
