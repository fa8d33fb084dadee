//! Store composition: selects and degrades between backend adapters.

pub mod failover;

pub use failover::FailoverStore;
