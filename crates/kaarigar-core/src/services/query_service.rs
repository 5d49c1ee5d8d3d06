//! Read-side job listing.
//!
//! Filtering and ordering for the browse view. Never takes a job's write
//! lock: listings read committed state straight from the store, so a
//! concurrent acceptance can never be blocked by a reader (and a reader may
//! see a job as open moments before it becomes assigned).

use crate::providers::CategoryCatalog;
use crate::store::MarketStore;
use kaarigar_commons::{CategoryId, Job, JobStatus};
use std::cmp::Reverse;
use std::sync::Arc;

/// Listing filter. Unset fields are wildcards; set fields AND together.
///
/// `status: None` means the browse default, `Open` — matching the client's
/// default view. To list terminal jobs the caller must ask for them
/// explicitly.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub category_id: Option<CategoryId>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
}

/// One row of the browse view: the job plus denormalized listing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSummary {
    pub job: Job,
    /// Resolved from the external catalog; `None` if the category has since
    /// disappeared from the taxonomy.
    pub category_name: Option<String>,
    pub bid_count: usize,
}

pub struct QueryService {
    store: Arc<MarketStore>,
    categories: Arc<dyn CategoryCatalog>,
}

impl QueryService {
    pub fn new(store: Arc<MarketStore>, categories: Arc<dyn CategoryCatalog>) -> Self {
        Self { store, categories }
    }

    /// List jobs matching the filter, most recently created first
    /// (creation timestamp then id, descending, for stable pagination).
    ///
    /// Location matching is a case-insensitive substring test, so a search
    /// for "karachi" finds "Karachi Cantt".
    pub fn list_jobs(&self, filter: &JobFilter) -> Vec<JobSummary> {
        let status = filter.status.unwrap_or(JobStatus::Open);
        let location_needle = filter
            .location
            .as_ref()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty());

        let mut jobs: Vec<Job> = self
            .store
            .jobs_snapshot()
            .into_iter()
            .filter(|job| job.status == status)
            .filter(|job| filter.category_id.map_or(true, |c| job.category_id == c))
            .filter(|job| {
                location_needle
                    .as_ref()
                    .map_or(true, |needle| job.location.to_lowercase().contains(needle))
            })
            .collect();
        jobs.sort_by_key(|job| Reverse((job.created_at, job.id)));

        jobs.into_iter()
            .map(|job| {
                let category_name = self.categories.name_of(job.category_id);
                let bid_count = self.store.bid_count(job.id);
                JobSummary {
                    job,
                    category_name,
                    bid_count,
                }
            })
            .collect()
    }
}
