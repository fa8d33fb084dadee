use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// One worker applying to one job. The job's applicant list is
/// deduplicated, application records are not: applying twice yields two
/// records for the same (job, worker) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Input for creating an application. New applications start `Pending`.
#[derive(Debug, Clone)]
pub struct ApplicationCreate {
    pub job_id: Uuid,
    pub worker_id: Uuid,
}

/// Partial update for an application. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
}
