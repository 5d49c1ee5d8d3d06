//! Bid status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a bid within a job's ledger.
///
/// A bid is `Pending` from submission until the job owner acts on it.
/// Accepting one bid rejects every other pending bid on the same job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    /// A live bid counts against the one-bid-per-provider-per-job rule.
    pub fn is_live(&self) -> bool {
        matches!(self, BidStatus::Pending | BidStatus::Accepted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
