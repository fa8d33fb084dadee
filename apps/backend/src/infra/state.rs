use std::sync::Arc;

use crate::adapters::accounts_sea::AccountStoreSea;
use crate::adapters::mem::MemStore;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::maybe_bootstrap_db;
use crate::repos::accounts::AccountStore;
use crate::state::app_state::AppState;
use crate::store::FailoverStore;

/// Builder for creating AppState instances (used in both tests and main).
///
/// Without `with_db` the state runs transient-only. `with_durable` injects
/// an account adapter directly, bypassing the environment; tests use it to
/// swap in fakes.
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    durable: Option<Arc<dyn AccountStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            durable: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_durable(mut self, durable: Arc<dyn AccountStore>) -> Self {
        self.durable = Some(durable);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let mem = Arc::new(MemStore::new());
        let durable: Option<Arc<dyn AccountStore>> = match (self.durable, self.db_profile) {
            (Some(store), _) => Some(store),
            (None, Some(profile)) => maybe_bootstrap_db(profile)
                .await?
                .map(|conn| Arc::new(AccountStoreSea::new(conn)) as Arc<dyn AccountStore>),
            (None, None) => None,
        };
        Ok(AppState::new(Arc::new(FailoverStore::new(mem, durable))))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(!state.store().durable_available());
    }
}
