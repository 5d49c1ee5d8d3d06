//! Job entity.

use crate::ids::{AccountId, CategoryId, JobId};
use crate::models::JobStatus;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A job posting owned by a seeker.
///
/// ## Fields
/// - `id`: Unique job identifier (snowflake, time-ordered)
/// - `seeker_id`: Owning seeker account; only the owner (or an admin) may
///   transition or cancel the job
/// - `title` / `description` / `location`: Opaque display strings
/// - `category_id`: Reference into the external category catalog
/// - `budget`: Optional non-negative amount the seeker expects to spend
/// - `status`: Lifecycle state, starts `Open`
/// - `assigned_provider_id`: Set exactly while the status is `Assigned` or
///   `Completed`, and always equal to the accepted bid's provider
/// - `image_urls`: Opaque references into external image storage
/// - `created_at` / `updated_at`: Unix timestamps in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub seeker_id: AccountId,
    pub title: String,
    pub description: String,
    pub category_id: CategoryId,
    pub location: String,
    pub budget: Option<BigDecimal>,
    pub status: JobStatus,
    pub assigned_provider_id: Option<AccountId>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Job {
    /// Create a fresh posting in status `Open` with no assigned provider.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: JobId,
        seeker_id: AccountId,
        title: String,
        description: String,
        category_id: CategoryId,
        location: String,
        budget: Option<BigDecimal>,
        image_urls: Vec<String>,
        now: i64,
    ) -> Self {
        Self {
            id,
            seeker_id,
            title,
            description,
            category_id,
            location,
            budget,
            status: JobStatus::Open,
            assigned_provider_id: None,
            image_urls,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when `account` owns this job.
    pub fn is_owned_by(&self, account: AccountId) -> bool {
        self.seeker_id == account
    }

    /// Move to `Assigned` with the winning provider.
    ///
    /// The caller (the lifecycle engine) has already validated the
    /// transition; this just applies it.
    pub fn assign(mut self, provider: AccountId, now: i64) -> Self {
        self.status = JobStatus::Assigned;
        self.assigned_provider_id = Some(provider);
        self.updated_at = now;
        self
    }

    /// Move to `Completed`, keeping the assigned provider for the record.
    pub fn complete(mut self, now: i64) -> Self {
        self.status = JobStatus::Completed;
        self.updated_at = now;
        self
    }

    /// Move to `Cancelled`. Only reachable from `Open`, so no provider to
    /// clear.
    pub fn cancel(mut self, now: i64) -> Self {
        self.status = JobStatus::Cancelled;
        self.updated_at = now;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job::new(
            JobId::new(1),
            AccountId::new(10),
            "Fix kitchen sink".to_string(),
            "Leaking under the counter".to_string(),
            CategoryId::new(3),
            "Karachi".to_string(),
            Some(BigDecimal::from(5000)),
            Vec::new(),
            1_000,
        )
    }

    #[test]
    fn test_new_job_is_open_and_unassigned() {
        let job = sample_job();
        assert_eq!(job.status, JobStatus::Open);
        assert!(job.assigned_provider_id.is_none());
        assert_eq!(job.created_at, job.updated_at);
    }

    #[test]
    fn test_assign_sets_provider_and_status_together() {
        let job = sample_job().assign(AccountId::new(20), 2_000);
        assert_eq!(job.status, JobStatus::Assigned);
        assert_eq!(job.assigned_provider_id, Some(AccountId::new(20)));
        assert_eq!(job.updated_at, 2_000);
    }

    #[test]
    fn test_complete_keeps_provider() {
        let job = sample_job().assign(AccountId::new(20), 2_000).complete(3_000);
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.assigned_provider_id, Some(AccountId::new(20)));
    }

    #[test]
    fn test_cancel_leaves_no_provider() {
        let job = sample_job().cancel(2_000);
        assert_eq!(job.status, JobStatus::Cancelled);
        assert!(job.assigned_provider_id.is_none());
    }

    #[test]
    fn test_ownership() {
        let job = sample_job();
        assert!(job.is_owned_by(AccountId::new(10)));
        assert!(!job.is_owned_by(AccountId::new(11)));
    }
}
