use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Job lifecycle. This core only drives `Open` (posting and applicant
/// accumulation); `Filled` and `Completed` arrive as externally-triggered
/// status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Filled,
    Completed,
}

/// Job snapshot. `applicants` is owned by the job and stays deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    /// Owning venue account.
    pub hub_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: JobStatus,
    pub applicants: Vec<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Input for posting a job. New jobs start `Open` with no applicants.
#[derive(Debug, Clone)]
pub struct JobCreate {
    pub hub_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
}

/// Partial update for a job. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
    pub applicants: Option<Vec<Uuid>>,
}

/// Typed filter for job listings. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub location: Option<String>,
    pub hub_id: Option<Uuid>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &job.location != location {
                return false;
            }
        }
        if let Some(hub_id) = self.hub_id {
            if job.hub_id != hub_id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(status: JobStatus, location: &str) -> Job {
        let now = OffsetDateTime::now_utc();
        Job {
            id: Uuid::new_v4(),
            hub_id: Uuid::new_v4(),
            title: "Bartender".into(),
            description: "Friday night shift".into(),
            location: location.into(),
            status,
            applicants: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(JobFilter::default().matches(&job(JobStatus::Open, "Berlin")));
        assert!(JobFilter::default().matches(&job(JobStatus::Completed, "Hamburg")));
    }

    #[test]
    fn filter_fields_combine() {
        let filter = JobFilter {
            status: Some(JobStatus::Open),
            location: Some("Berlin".into()),
            hub_id: None,
        };
        assert!(filter.matches(&job(JobStatus::Open, "Berlin")));
        assert!(!filter.matches(&job(JobStatus::Filled, "Berlin")));
        assert!(!filter.matches(&job(JobStatus::Open, "Hamburg")));
    }
}
