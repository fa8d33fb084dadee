//! Storage contract: one trait per entity.
//!
//! Every backend adapter implements these traits with identical observable
//! behavior, with one documented exception: the durable account adapter
//! collapses the role set to a single category (`adapters::accounts_sea`).
//! Absence is `Ok(None)` from `find`, never an error; `update` fails with
//! `NotFound` for a missing id; `create` returns the fully materialized
//! snapshot including generated id and timestamps.

pub mod accounts;
pub mod applications;
pub mod chats;
pub mod jobs;
pub mod posts;

pub use accounts::AccountStore;
pub use applications::ApplicationStore;
pub use chats::ChatStore;
pub use jobs::JobStore;
pub use posts::PostStore;
