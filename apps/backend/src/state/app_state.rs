use std::sync::Arc;

use crate::repos::{AccountStore, ApplicationStore, ChatStore, JobStore, PostStore};
use crate::store::FailoverStore;

/// Application state containing shared resources.
///
/// The one injected dependency is the store composition; handlers reach
/// every backend through it and tests build it around fakes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<FailoverStore>,
}

impl AppState {
    pub fn new(store: Arc<FailoverStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FailoverStore {
        &self.store
    }

    pub fn accounts(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    pub fn jobs(&self) -> &dyn JobStore {
        self.store.as_ref()
    }

    pub fn applications(&self) -> &dyn ApplicationStore {
        self.store.as_ref()
    }

    pub fn chats(&self) -> &dyn ChatStore {
        self.store.as_ref()
    }

    pub fn posts(&self) -> &dyn PostStore {
        self.store.as_ref()
    }
}
