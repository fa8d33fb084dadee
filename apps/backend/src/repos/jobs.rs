use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::job::{Job, JobCreate, JobFilter, JobUpdate};
use crate::errors::domain::DomainError;

/// Job storage contract. Listings are newest-first.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    async fn create(&self, input: JobCreate) -> Result<Job, DomainError>;

    async fn update(&self, id: Uuid, changes: JobUpdate) -> Result<Job, DomainError>;

    async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, DomainError>;
}
