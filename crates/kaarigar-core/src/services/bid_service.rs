//! Bid ledger service.
//!
//! Owns the set of bids per job: submission (one live bid per provider per
//! job), acceptance (which rejects every competing pending bid and assigns
//! the job in the same critical section), and rejection. Guard checks run
//! before the lock for fast denial; every state condition is re-checked
//! inside the lock, because the world may have moved between the two.

use crate::error::{MarketError, MarketResult};
use crate::guard::{self, Denial};
use crate::identity::Identity;
use crate::services::now_ms;
use crate::store::MarketStore;
use bigdecimal::BigDecimal;
use kaarigar_commons::{AccountId, Bid, BidId, BidStatus, Job, JobId, JobStatus};
use std::sync::Arc;

/// Input for submitting a bid.
#[derive(Debug, Clone)]
pub struct NewBid {
    pub job_id: JobId,
    pub proposed_cost: BigDecimal,
    pub estimated_time: String,
    pub proposal_message: String,
}

pub struct BidService {
    store: Arc<MarketStore>,
}

impl BidService {
    pub fn new(store: Arc<MarketStore>) -> Self {
        Self { store }
    }

    /// Submit a bid on an open job.
    ///
    /// The open check happens twice: once in the guard pre-check and again
    /// at commit time inside the job lock, so a job assigned or cancelled
    /// in between still fails with `JobNotOpen` rather than slipping a bid
    /// onto a closed job.
    pub fn submit(&self, identity: &Identity, new_bid: NewBid) -> MarketResult<Bid> {
        self.validate(&new_bid)?;

        let job = self.get_job(new_bid.job_id)?;
        guard::can_submit_bid(identity.role, job.status).map_err(|denial| match denial {
            Denial::JobNotOpen => MarketError::JobNotOpen {
                job: job.id,
                status: job.status,
            },
            other => MarketError::Forbidden(other),
        })?;

        let job_id = job.id;
        self.store.with_job_lock(job_id, || {
            let job = self.get_job(job_id)?;
            if job.status != JobStatus::Open {
                return Err(MarketError::JobNotOpen {
                    job: job_id,
                    status: job.status,
                });
            }

            let already_live = self
                .store
                .bids_for_job(job_id)
                .iter()
                .any(|b| b.provider_id == identity.account_id && b.status.is_live());
            if already_live {
                return Err(MarketError::DuplicateBid {
                    job: job_id,
                    provider: identity.account_id,
                });
            }

            let bid = Bid::new(
                self.store.next_bid_id(),
                job_id,
                identity.account_id,
                new_bid.proposed_cost.clone(),
                new_bid.estimated_time.trim().to_string(),
                new_bid.proposal_message.trim().to_string(),
                now_ms(),
            );
            self.store.insert_bid(bid.clone());
            log::info!(
                "Bid {} submitted on job {} by provider {}",
                bid.id,
                job_id,
                identity.account_id
            );
            Ok(bid)
        })
    }

    /// Accept a bid.
    ///
    /// Atomically, under the job's lock: the target bid becomes accepted,
    /// every other pending bid on the job becomes rejected, and the job
    /// moves `Open → Assigned` with the bid's provider. If the job is no
    /// longer open or the bid no longer pending by commit time, nothing is
    /// mutated and the caller gets `ConflictingState`.
    pub fn accept(&self, identity: &Identity, bid_id: BidId) -> MarketResult<Bid> {
        let bid = self.get_bid(bid_id)?;
        let job = self.get_job(bid.job_id)?;
        guard::can_accept_bid(
            identity.role,
            job.is_owned_by(identity.account_id),
            job.status,
            bid.status,
        )
        .map_err(|denial| match denial {
            // State drift between read and call is a race, not a
            // permission problem
            Denial::JobNotOpen | Denial::BidNotPending => {
                MarketError::ConflictingState(denial.to_string())
            }
            other => MarketError::Forbidden(other),
        })?;

        let job_id = job.id;
        self.store
            .with_job_lock(job_id, || self.accept_locked(job_id, bid_id))
    }

    /// Accept the pending bid a specific provider holds on a job.
    ///
    /// This is the `assign_provider` binding the client uses: the seeker
    /// picks a provider, which is equivalent to accepting that provider's
    /// pending bid. Returns the updated job.
    pub fn assign_provider(
        &self,
        identity: &Identity,
        job_id: JobId,
        provider_id: AccountId,
    ) -> MarketResult<Job> {
        let bid = self
            .store
            .bids_for_job(job_id)
            .into_iter()
            .find(|b| b.provider_id == provider_id && b.status == BidStatus::Pending)
            .ok_or_else(|| {
                MarketError::NotFound(format!(
                    "Provider {} has no pending bid on job {}",
                    provider_id, job_id
                ))
            })?;
        self.accept(identity, bid.id)?;
        self.get_job(job_id)
    }

    /// Reject a single pending bid without touching the job's status.
    ///
    /// Allowed regardless of whether the job is still open: an owner may
    /// prune offers at any time.
    pub fn reject(&self, identity: &Identity, bid_id: BidId) -> MarketResult<Bid> {
        let bid = self.get_bid(bid_id)?;
        let job = self.get_job(bid.job_id)?;
        guard::can_reject_bid(identity.role, job.is_owned_by(identity.account_id), bid.status)
            .map_err(|denial| match denial {
                Denial::BidNotPending => MarketError::ConflictingState(denial.to_string()),
                other => MarketError::Forbidden(other),
            })?;

        self.store.with_job_lock(job.id, || {
            let bid = self.get_bid(bid_id)?;
            if bid.status != BidStatus::Pending {
                return Err(MarketError::ConflictingState(format!(
                    "Bid {} is no longer pending",
                    bid_id
                )));
            }
            let rejected = bid.reject(now_ms());
            self.store.put_bid(rejected.clone());
            log::info!("Bid {} rejected on job {}", bid_id, rejected.job_id);
            Ok(rejected)
        })
    }

    /// All bids on a job, submission order.
    pub fn list_for_job(&self, job_id: JobId) -> MarketResult<Vec<Bid>> {
        // Listing bids on a missing job is NotFound, not an empty list
        self.get_job(job_id)?;
        Ok(self.store.bids_for_job(job_id))
    }

    /// All bids a provider has placed, most recent first.
    pub fn list_for_provider(&self, provider_id: AccountId) -> Vec<Bid> {
        self.store.bids_for_provider(provider_id)
    }

    fn accept_locked(&self, job_id: JobId, bid_id: BidId) -> MarketResult<Bid> {
        let job = self.get_job(job_id)?;
        let bid = self.get_bid(bid_id)?;

        if job.status != JobStatus::Open {
            return Err(MarketError::ConflictingState(format!(
                "Job {} is no longer open (status: {})",
                job_id, job.status
            )));
        }
        if bid.status != BidStatus::Pending {
            return Err(MarketError::ConflictingState(format!(
                "Bid {} is no longer pending (status: {})",
                bid_id, bid.status
            )));
        }

        // All checks passed; commit. Competing pending bids first, then the
        // winner, then the job transition, so the one-accepted-bid and
        // provider/status invariants hold at every intermediate step a
        // concurrent reader could observe.
        let now = now_ms();
        for other in self.store.bids_for_job(job_id) {
            if other.id != bid_id && other.status == BidStatus::Pending {
                self.store.put_bid(other.reject(now));
            }
        }
        let accepted = bid.accept(now);
        self.store.put_bid(accepted.clone());
        self.store.put_job(job.assign(accepted.provider_id, now));

        log::info!(
            "Bid {} accepted on job {}; job assigned to provider {}",
            bid_id,
            job_id,
            accepted.provider_id
        );
        Ok(accepted)
    }

    fn validate(&self, new_bid: &NewBid) -> MarketResult<()> {
        if new_bid.proposed_cost < BigDecimal::from(0) {
            return Err(MarketError::Validation(
                "Proposed cost must be non-negative".into(),
            ));
        }
        if new_bid.estimated_time.trim().is_empty() {
            return Err(MarketError::Validation("Estimated time is required".into()));
        }
        if new_bid.proposal_message.trim().is_empty() {
            return Err(MarketError::Validation(
                "Proposal message is required".into(),
            ));
        }
        Ok(())
    }

    fn get_job(&self, job_id: JobId) -> MarketResult<Job> {
        self.store
            .get_job(job_id)
            .ok_or_else(|| MarketError::NotFound(format!("Job {} not found", job_id)))
    }

    fn get_bid(&self, bid_id: BidId) -> MarketResult<Bid> {
        self.store
            .get_bid(bid_id)
            .ok_or_else(|| MarketError::NotFound(format!("Bid {} not found", bid_id)))
    }
}
