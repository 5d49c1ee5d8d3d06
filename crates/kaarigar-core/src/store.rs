//! In-memory market store.
//!
//! Holds the committed state of jobs and bids plus the per-job lock registry
//! that serializes mutations. Reads go straight to the maps (read-committed:
//! a reader may see a job as open moments before it becomes assigned);
//! writers must run inside [`MarketStore::with_job_lock`].

use crate::error::{MarketError, MarketResult};
use dashmap::DashMap;
use kaarigar_commons::{AccountId, Bid, BidId, Job, JobId, SnowflakeGenerator};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Bound on how long a writer waits for a job's critical section before
/// giving up with `ConflictingState`. Nothing in this core blocks
/// indefinitely.
const JOB_LOCK_WAIT: Duration = Duration::from_secs(2);

/// Shared in-memory store for jobs and bids.
pub struct MarketStore {
    jobs: DashMap<JobId, Job>,
    bids: DashMap<BidId, Bid>,
    /// One mutex per job; entries are created lazily and never removed while
    /// the job exists.
    job_locks: DashMap<JobId, Arc<Mutex<()>>>,
    ids: SnowflakeGenerator,
}

impl MarketStore {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
            bids: DashMap::new(),
            job_locks: DashMap::new(),
            ids: SnowflakeGenerator::default(),
        }
    }

    /// Next time-ordered job identifier.
    pub fn next_job_id(&self) -> JobId {
        JobId::new(self.ids.next_id())
    }

    /// Next time-ordered bid identifier.
    pub fn next_bid_id(&self) -> BidId {
        BidId::new(self.ids.next_id())
    }

    /// Run `f` inside the job's single-writer critical section.
    ///
    /// Every mutation path touching a job or its bids must go through here:
    /// the closure re-checks state, applies its mutations, and returns.
    /// Acquisition waits at most [`JOB_LOCK_WAIT`]; on timeout the caller
    /// gets `ConflictingState` and may retry after re-fetching state.
    pub fn with_job_lock<T>(
        &self,
        job_id: JobId,
        f: impl FnOnce() -> MarketResult<T>,
    ) -> MarketResult<T> {
        let lock = self
            .job_locks
            .entry(job_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = lock.try_lock_for(JOB_LOCK_WAIT).ok_or_else(|| {
            log::warn!("Timed out waiting for write access to job {}", job_id);
            MarketError::ConflictingState(format!(
                "Timed out waiting for write access to job {}",
                job_id
            ))
        })?;

        let result = f();
        drop(guard);
        result
    }

    pub fn insert_job(&self, job: Job) {
        self.jobs.insert(job.id, job);
    }

    /// Replace a job's committed state.
    pub fn put_job(&self, job: Job) {
        self.jobs.insert(job.id, job);
    }

    pub fn get_job(&self, id: JobId) -> Option<Job> {
        self.jobs.get(&id).map(|j| j.clone())
    }

    /// Snapshot of all jobs, in no particular order.
    pub fn jobs_snapshot(&self) -> Vec<Job> {
        self.jobs.iter().map(|j| j.clone()).collect()
    }

    pub fn insert_bid(&self, bid: Bid) {
        self.bids.insert(bid.id, bid);
    }

    /// Replace a bid's committed state.
    pub fn put_bid(&self, bid: Bid) {
        self.bids.insert(bid.id, bid);
    }

    pub fn get_bid(&self, id: BidId) -> Option<Bid> {
        self.bids.get(&id).map(|b| b.clone())
    }

    /// All bids on a job, in submission order (creation time, then id).
    pub fn bids_for_job(&self, job_id: JobId) -> Vec<Bid> {
        let mut bids: Vec<Bid> = self
            .bids
            .iter()
            .filter(|b| b.job_id == job_id)
            .map(|b| b.clone())
            .collect();
        bids.sort_by_key(|b| (b.created_at, b.id));
        bids
    }

    /// All bids a provider has placed, most recent first.
    pub fn bids_for_provider(&self, provider_id: AccountId) -> Vec<Bid> {
        let mut bids: Vec<Bid> = self
            .bids
            .iter()
            .filter(|b| b.provider_id == provider_id)
            .map(|b| b.clone())
            .collect();
        bids.sort_by_key(|b| std::cmp::Reverse((b.created_at, b.id)));
        bids
    }

    /// Number of bids on a job (any status), for listing denormalization.
    pub fn bid_count(&self, job_id: JobId) -> usize {
        self.bids.iter().filter(|b| b.job_id == job_id).count()
    }
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}
