//! Bid entity.

use crate::ids::{AccountId, BidId, JobId};
use crate::models::BidStatus;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A provider's priced, timed proposal to fulfill a specific job.
///
/// At most one bid per (job, provider) pair may be live (pending or
/// accepted) at a time, and at most one bid per job may ever be accepted.
/// Both rules are enforced by the bid ledger, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub job_id: JobId,
    pub provider_id: AccountId,
    pub proposed_cost: BigDecimal,
    /// Free-form estimate, e.g. "2-3 days"
    pub estimated_time: String,
    pub proposal_message: String,
    pub status: BidStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bid {
    /// Create a fresh bid in status `Pending`.
    pub fn new(
        id: BidId,
        job_id: JobId,
        provider_id: AccountId,
        proposed_cost: BigDecimal,
        estimated_time: String,
        proposal_message: String,
        now: i64,
    ) -> Self {
        Self {
            id,
            job_id,
            provider_id,
            proposed_cost,
            estimated_time,
            proposal_message,
            status: BidStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark accepted.
    pub fn accept(mut self, now: i64) -> Self {
        self.status = BidStatus::Accepted;
        self.updated_at = now;
        self
    }

    /// Mark rejected.
    pub fn reject(mut self, now: i64) -> Self {
        self.status = BidStatus::Rejected;
        self.updated_at = now;
        self
    }
}
