//! Domain invariant layer.
//!
//! Free functions over the storage contract, so tests (and the routing
//! layer) can hand in any adapter or fake. Each operation is one
//! fetch/compute/write sequence with no locking: concurrent calls against
//! the same entity can interleave reads before writes, last writer wins.

pub mod accounts;
pub mod chats;
pub mod jobs;
pub mod posts;
