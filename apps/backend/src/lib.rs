#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod repos;
pub mod services;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::accounts_sea::AccountStoreSea;
pub use adapters::mem::MemStore;
pub use config::db::{db_url, maybe_db_url, DbOwner, DbProfile};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use state::app_state::AppState;
pub use store::failover::FailoverStore;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
