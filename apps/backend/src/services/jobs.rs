use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::application::{Application, ApplicationCreate, ApplicationStatus, ApplicationUpdate};
use crate::domain::job::{Job, JobCreate, JobFilter, JobStatus, JobUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::applications::ApplicationStore;
use crate::repos::jobs::JobStore;

/// Post a new job. Jobs start `Open` with an empty applicant list.
pub async fn post_job(jobs: &dyn JobStore, input: JobCreate) -> Result<Job, DomainError> {
    let job = jobs.create(input).await?;
    info!(job_id = %job.id, hub_id = %job.hub_id, "job posted");
    Ok(job)
}

/// Worker-facing board listing.
pub async fn browse(jobs: &dyn JobStore, filter: &JobFilter) -> Result<Vec<Job>, DomainError> {
    jobs.list(filter).await
}

/// Accept an externally-triggered lifecycle transition. This core only
/// drives `Open`; `Filled` and `Completed` arrive from outside and are
/// recorded as-is.
pub async fn update_status(
    jobs: &dyn JobStore,
    id: Uuid,
    status: JobStatus,
) -> Result<Job, DomainError> {
    let job = jobs
        .update(
            id,
            JobUpdate {
                status: Some(status),
                ..JobUpdate::default()
            },
        )
        .await?;
    debug!(job_id = %id, status = ?status, "job status updated");
    Ok(job)
}

/// Apply a worker to a job.
///
/// The applicant list append is idempotent, the application record is
/// not: every call creates a fresh record, so a worker applying twice
/// leaves one list entry and two records. Callers that want the records
/// unique per (job, worker) pair would reject here with
/// `ConflictKind::DuplicateApplication` instead.
pub async fn apply_to_job(
    jobs: &dyn JobStore,
    applications: &dyn ApplicationStore,
    job_id: Uuid,
    worker_id: Uuid,
) -> Result<Application, DomainError> {
    let job = jobs
        .find(job_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, "No such job"))?;

    if !job.applicants.contains(&worker_id) {
        let mut applicants = job.applicants;
        applicants.push(worker_id);
        jobs.update(
            job_id,
            JobUpdate {
                applicants: Some(applicants),
                ..JobUpdate::default()
            },
        )
        .await?;
    }

    let application = applications
        .create(ApplicationCreate { job_id, worker_id })
        .await?;
    info!(
        job_id = %job_id,
        worker_id = %worker_id,
        application_id = %application.id,
        "application submitted"
    );
    Ok(application)
}

/// Record the venue's decision on an application.
pub async fn decide_application(
    applications: &dyn ApplicationStore,
    id: Uuid,
    decision: ApplicationStatus,
) -> Result<Application, DomainError> {
    if decision == ApplicationStatus::Pending {
        return Err(DomainError::validation(
            "A decision is either accepted or rejected",
        ));
    }
    applications
        .update(
            id,
            ApplicationUpdate {
                status: Some(decision),
            },
        )
        .await
}
