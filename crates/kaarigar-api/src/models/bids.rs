//! Bid request/response models.

use bigdecimal::BigDecimal;
use kaarigar_commons::{Bid, BidStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /bids`. The bidding provider comes from the caller's
/// identity, never from the body.
#[derive(Debug, Deserialize)]
pub struct SubmitBidRequest {
    pub job_id: i64,
    pub proposed_cost: BigDecimal,
    pub estimated_time: String,
    pub proposal_message: String,
}

/// A bid as rendered in responses, enriched with the provider's display
/// name from the external profile lookup when one exists.
#[derive(Debug, Serialize)]
pub struct BidView {
    pub id: i64,
    pub job_id: i64,
    pub provider_id: i64,
    pub provider_name: Option<String>,
    pub proposed_cost: BigDecimal,
    pub estimated_time: String,
    pub proposal_message: String,
    pub status: BidStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl BidView {
    pub fn from_bid(bid: Bid, provider_name: Option<String>) -> Self {
        Self {
            id: bid.id.as_i64(),
            job_id: bid.job_id.as_i64(),
            provider_id: bid.provider_id.as_i64(),
            provider_name,
            proposed_cost: bid.proposed_cost,
            estimated_time: bid.estimated_time,
            proposal_message: bid.proposal_message,
            status: bid.status,
            created_at: bid.created_at,
            updated_at: bid.updated_at,
        }
    }
}
