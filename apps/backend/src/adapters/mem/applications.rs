use async_trait::async_trait;
use uuid::Uuid;

use super::{now, MemStore};
use crate::domain::application::{
    Application, ApplicationCreate, ApplicationStatus, ApplicationUpdate,
};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::applications::ApplicationStore;

#[async_trait]
impl ApplicationStore for MemStore {
    async fn find(&self, id: Uuid) -> Result<Option<Application>, DomainError> {
        Ok(self.applications.get(&id).map(|a| a.clone()))
    }

    async fn create(&self, input: ApplicationCreate) -> Result<Application, DomainError> {
        let ts = now();
        let application = Application {
            id: Uuid::new_v4(),
            job_id: input.job_id,
            worker_id: input.worker_id,
            status: ApplicationStatus::Pending,
            created_at: ts,
            updated_at: ts,
        };
        self.applications.insert(application.id, application.clone());
        Ok(application)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ApplicationUpdate,
    ) -> Result<Application, DomainError> {
        let mut entry = self.applications.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Application, "No such application")
        })?;

        let application = entry.value_mut();
        if let Some(status) = changes.status {
            application.status = status;
        }
        application.updated_at = now();
        Ok(application.clone())
    }

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<Application>, DomainError> {
        Ok(self.collect_applications(|a| a.job_id == job_id))
    }

    async fn list_by_worker(&self, worker_id: Uuid) -> Result<Vec<Application>, DomainError> {
        Ok(self.collect_applications(|a| a.worker_id == worker_id))
    }
}

impl MemStore {
    fn collect_applications(&self, keep: impl Fn(&Application) -> bool) -> Vec<Application> {
        let mut applications: Vec<Application> = self
            .applications
            .iter()
            .filter(|a| keep(a.value()))
            .map(|a| a.clone())
            .collect();
        applications.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        applications
    }
}
