//! Failover orchestration over the backend adapters.
//!
//! `FailoverStore` owns the transient store and, when configured, a
//! durable account adapter. Account operations go durable-first and fall
//! back to the transient store on any durable error; the degradation is
//! logged, not surfaced. Job, application, post, and chat/message
//! operations always run against the transient store: only account data is
//! ever durably persisted.
//!
//! There is no reconciliation pass. Writes that land in the transient
//! store while the durable backend is down stay there, and the two
//! backends are not re-synchronized when it comes back.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::adapters::mem::MemStore;
use crate::domain::account::{Account, AccountCreate, AccountUpdate};
use crate::domain::application::{Application, ApplicationCreate, ApplicationUpdate};
use crate::domain::chat::{Chat, ChatCreate, ChatUpdate, Message, MessageCreate};
use crate::domain::job::{Job, JobCreate, JobFilter, JobUpdate};
use crate::domain::post::{Post, PostCreate};
use crate::errors::domain::DomainError;
use crate::repos::{AccountStore, ApplicationStore, ChatStore, JobStore, PostStore};

pub struct FailoverStore {
    mem: Arc<MemStore>,
    durable: Option<Arc<dyn AccountStore>>,
}

impl FailoverStore {
    pub fn new(mem: Arc<MemStore>, durable: Option<Arc<dyn AccountStore>>) -> Self {
        Self { mem, durable }
    }

    pub fn transient_only(mem: Arc<MemStore>) -> Self {
        Self { mem, durable: None }
    }

    /// Whether account operations will attempt the durable backend at all.
    pub fn durable_available(&self) -> bool {
        self.durable.is_some()
    }

    fn degraded(op: &'static str, error: &DomainError) {
        warn!(op, error = %error, "durable backend failed, retrying against transient store");
    }
}

#[async_trait]
impl AccountStore for FailoverStore {
    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        if let Some(durable) = &self.durable {
            match durable.find(id).await {
                Ok(found) => return Ok(found),
                Err(e) => Self::degraded("accounts.find", &e),
            }
        }
        AccountStore::find(self.mem.as_ref(), id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        if let Some(durable) = &self.durable {
            match durable.find_by_email(email).await {
                Ok(found) => return Ok(found),
                Err(e) => Self::degraded("accounts.find_by_email", &e),
            }
        }
        self.mem.find_by_email(email).await
    }

    async fn create(&self, input: AccountCreate) -> Result<Account, DomainError> {
        if let Some(durable) = &self.durable {
            match durable.create(input.clone()).await {
                Ok(account) => return Ok(account),
                Err(e) => Self::degraded("accounts.create", &e),
            }
        }
        AccountStore::create(self.mem.as_ref(), input).await
    }

    async fn update(&self, id: Uuid, changes: AccountUpdate) -> Result<Account, DomainError> {
        if let Some(durable) = &self.durable {
            match durable.update(id, changes.clone()).await {
                Ok(account) => return Ok(account),
                Err(e) => Self::degraded("accounts.update", &e),
            }
        }
        AccountStore::update(self.mem.as_ref(), id, changes).await
    }
}

#[async_trait]
impl JobStore for FailoverStore {
    async fn find(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        JobStore::find(self.mem.as_ref(), id).await
    }

    async fn create(&self, input: JobCreate) -> Result<Job, DomainError> {
        JobStore::create(self.mem.as_ref(), input).await
    }

    async fn update(&self, id: Uuid, changes: JobUpdate) -> Result<Job, DomainError> {
        JobStore::update(self.mem.as_ref(), id, changes).await
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, DomainError> {
        self.mem.list(filter).await
    }
}

#[async_trait]
impl ApplicationStore for FailoverStore {
    async fn find(&self, id: Uuid) -> Result<Option<Application>, DomainError> {
        ApplicationStore::find(self.mem.as_ref(), id).await
    }

    async fn create(&self, input: ApplicationCreate) -> Result<Application, DomainError> {
        ApplicationStore::create(self.mem.as_ref(), input).await
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ApplicationUpdate,
    ) -> Result<Application, DomainError> {
        ApplicationStore::update(self.mem.as_ref(), id, changes).await
    }

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>, DomainError> {
        self.mem.list_by_job(job_id).await
    }

    async fn list_by_worker(&self, worker_id: Uuid) -> Result<Vec<Application>, DomainError> {
        self.mem.list_by_worker(worker_id).await
    }
}

#[async_trait]
impl ChatStore for FailoverStore {
    async fn find(&self, id: Uuid) -> Result<Option<Chat>, DomainError> {
        ChatStore::find(self.mem.as_ref(), id).await
    }

    async fn find_by_participants(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<Chat>, DomainError> {
        self.mem.find_by_participants(a, b).await
    }

    async fn create(&self, input: ChatCreate) -> Result<Chat, DomainError> {
        ChatStore::create(self.mem.as_ref(), input).await
    }

    async fn update(&self, id: Uuid, changes: ChatUpdate) -> Result<Chat, DomainError> {
        ChatStore::update(self.mem.as_ref(), id, changes).await
    }

    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Chat>, DomainError> {
        self.mem.list_for_account(account_id).await
    }

    async fn create_message(&self, input: MessageCreate) -> Result<Message, DomainError> {
        self.mem.create_message(input).await
    }

    async fn messages(&self, chat_id: Uuid) -> Result<Vec<Message>, DomainError> {
        self.mem.messages(chat_id).await
    }

    async fn mark_messages_read(
        &self,
        chat_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<usize, DomainError> {
        self.mem.mark_messages_read(chat_id, receiver_id).await
    }
}

#[async_trait]
impl PostStore for FailoverStore {
    async fn find(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        PostStore::find(self.mem.as_ref(), id).await
    }

    async fn create(&self, input: PostCreate) -> Result<Post, DomainError> {
        PostStore::create(self.mem.as_ref(), input).await
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError> {
        self.mem.list_by_author(author_id).await
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        self.mem.list_recent(limit).await
    }
}
