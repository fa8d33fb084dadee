use async_trait::async_trait;
use uuid::Uuid;

use super::{now, MemStore};
use crate::domain::job::{Job, JobCreate, JobFilter, JobStatus, JobUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::jobs::JobStore;

#[async_trait]
impl JobStore for MemStore {
    async fn find(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        Ok(self.jobs.get(&id).map(|j| j.clone()))
    }

    async fn create(&self, input: JobCreate) -> Result<Job, DomainError> {
        let ts = now();
        let job = Job {
            id: Uuid::new_v4(),
            hub_id: input.hub_id,
            title: input.title,
            description: input.description,
            location: input.location,
            status: JobStatus::Open,
            applicants: Vec::new(),
            created_at: ts,
            updated_at: ts,
        };
        self.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, changes: JobUpdate) -> Result<Job, DomainError> {
        let mut entry = self
            .jobs
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, "No such job"))?;

        let job = entry.value_mut();
        if let Some(title) = changes.title {
            job.title = title;
        }
        if let Some(description) = changes.description {
            job.description = description;
        }
        if let Some(location) = changes.location {
            job.location = location;
        }
        if let Some(status) = changes.status {
            job.status = status;
        }
        if let Some(applicants) = changes.applicants {
            job.applicants = applicants;
        }
        job.updated_at = now();
        Ok(job.clone())
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, DomainError> {
        let mut jobs: Vec<Job> = self
            .jobs
            .iter()
            .filter(|j| filter.matches(j.value()))
            .map(|j| j.clone())
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(jobs)
    }
}
