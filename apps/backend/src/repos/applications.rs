use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::application::{Application, ApplicationCreate, ApplicationUpdate};
use crate::errors::domain::DomainError;

/// Application storage contract.
///
/// `create` has no (job, worker) uniqueness check; callers that apply twice
/// get two records. See `ConflictKind::DuplicateApplication`.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Application>, DomainError>;

    async fn create(&self, input: ApplicationCreate) -> Result<Application, DomainError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ApplicationUpdate,
    ) -> Result<Application, DomainError>;

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>, DomainError>;

    async fn list_by_worker(&self, worker_id: Uuid) -> Result<Vec<Application>, DomainError>;
}
