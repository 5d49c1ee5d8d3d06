//! Job lifecycle service.
//!
//! Owns creation and the explicit transitions (cancel, complete). The
//! `Open → Assigned` transition is not here: it only happens as a side
//! effect of accepting a bid, inside the bid ledger's critical section.

use crate::error::{MarketError, MarketResult};
use crate::guard;
use crate::identity::Identity;
use crate::providers::CategoryCatalog;
use crate::services::now_ms;
use crate::store::MarketStore;
use bigdecimal::BigDecimal;
use kaarigar_commons::{Job, JobId, JobStatus};
use std::sync::Arc;

/// Input for creating a job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub category_id: kaarigar_commons::CategoryId,
    pub location: String,
    pub budget: Option<BigDecimal>,
    pub image_urls: Vec<String>,
}

pub struct JobService {
    store: Arc<MarketStore>,
    categories: Arc<dyn CategoryCatalog>,
}

impl JobService {
    pub fn new(store: Arc<MarketStore>, categories: Arc<dyn CategoryCatalog>) -> Self {
        Self { store, categories }
    }

    /// Create a job posting in status `Open`, owned by the caller.
    pub fn create(&self, identity: &Identity, new_job: NewJob) -> MarketResult<Job> {
        guard::can_create_job(identity.role).map_err(MarketError::Forbidden)?;
        self.validate(&new_job)?;

        let job = Job::new(
            self.store.next_job_id(),
            identity.account_id,
            new_job.title.trim().to_string(),
            new_job.description.trim().to_string(),
            new_job.category_id,
            new_job.location.trim().to_string(),
            new_job.budget,
            new_job.image_urls,
            now_ms(),
        );
        self.store.insert_job(job.clone());
        log::info!("Job {} created by account {}", job.id, identity.account_id);
        Ok(job)
    }

    /// Fetch a job by id.
    pub fn get(&self, job_id: JobId) -> MarketResult<Job> {
        self.store
            .get_job(job_id)
            .ok_or_else(|| MarketError::NotFound(format!("Job {} not found", job_id)))
    }

    /// Cancel an open job.
    ///
    /// Pending bids on the job stay pending; they become unacceptable
    /// because the job is no longer open, and the owner may still reject
    /// them individually.
    pub fn cancel(&self, identity: &Identity, job_id: JobId) -> MarketResult<Job> {
        let job = self.get(job_id)?;
        guard::can_cancel_job(identity.role, job.is_owned_by(identity.account_id))
            .map_err(MarketError::Forbidden)?;

        self.store.with_job_lock(job_id, || {
            let job = self
                .store
                .get_job(job_id)
                .ok_or_else(|| MarketError::NotFound(format!("Job {} not found", job_id)))?;
            if !job.status.can_transition_to(JobStatus::Cancelled) {
                return Err(MarketError::InvalidTransition {
                    job: job_id,
                    from: job.status,
                    to: JobStatus::Cancelled,
                });
            }
            let cancelled = job.cancel(now_ms());
            self.store.put_job(cancelled.clone());
            log::info!("Job {} cancelled by account {}", job_id, identity.account_id);
            Ok(cancelled)
        })
    }

    /// Mark an assigned job's work as done.
    pub fn complete(&self, identity: &Identity, job_id: JobId) -> MarketResult<Job> {
        let job = self.get(job_id)?;
        guard::can_complete_job(identity.role, job.is_owned_by(identity.account_id))
            .map_err(MarketError::Forbidden)?;

        self.store.with_job_lock(job_id, || {
            let job = self
                .store
                .get_job(job_id)
                .ok_or_else(|| MarketError::NotFound(format!("Job {} not found", job_id)))?;
            if !job.status.can_transition_to(JobStatus::Completed) {
                return Err(MarketError::InvalidTransition {
                    job: job_id,
                    from: job.status,
                    to: JobStatus::Completed,
                });
            }
            let completed = job.complete(now_ms());
            self.store.put_job(completed.clone());
            log::info!("Job {} completed", job_id);
            Ok(completed)
        })
    }

    fn validate(&self, new_job: &NewJob) -> MarketResult<()> {
        if new_job.title.trim().is_empty() {
            return Err(MarketError::Validation("Title is required".into()));
        }
        if new_job.description.trim().is_empty() {
            return Err(MarketError::Validation("Description is required".into()));
        }
        if new_job.location.trim().is_empty() {
            return Err(MarketError::Validation("Location is required".into()));
        }
        if let Some(budget) = &new_job.budget {
            if *budget < BigDecimal::from(0) {
                return Err(MarketError::Validation(
                    "Budget must be non-negative".into(),
                ));
            }
        }
        if self.categories.name_of(new_job.category_id).is_none() {
            return Err(MarketError::Validation(format!(
                "Unknown category: {}",
                new_job.category_id
            )));
        }
        Ok(())
    }
}
