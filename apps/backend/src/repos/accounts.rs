use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::{Account, AccountCreate, AccountUpdate};
use crate::errors::domain::DomainError;

/// Account storage contract.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    async fn create(&self, input: AccountCreate) -> Result<Account, DomainError>;

    async fn update(&self, id: Uuid, changes: AccountUpdate) -> Result<Account, DomainError>;
}
