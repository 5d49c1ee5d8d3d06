// Error types module
use crate::guard::Denial;
use kaarigar_commons::{AccountId, JobId, JobStatus};
use thiserror::Error;

/// Main error type for the marketplace core.
///
/// Every failure a caller can hit is a distinct variant; nothing is
/// downgraded to a generic error. `code()` gives the stable machine-readable
/// string the API layer puts on the wire. Of these, only `ConflictingState`
/// is safe to retry after re-fetching current state — the rest will
/// reproduce the same failure until the input is corrected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(Denial),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: job {job} cannot move from {from} to {to}")]
    InvalidTransition {
        job: JobId,
        from: JobStatus,
        to: JobStatus,
    },

    #[error("Provider {provider} already holds a live bid on job {job}")]
    DuplicateBid { job: JobId, provider: AccountId },

    #[error("Job {job} is not open for bids (status: {status})")]
    JobNotOpen { job: JobId, status: JobStatus },

    #[error("Conflicting state: {0}")]
    ConflictingState(String),
}

impl MarketError {
    /// Stable error code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            MarketError::Unauthenticated(_) => "UNAUTHENTICATED",
            MarketError::Forbidden(_) => "FORBIDDEN",
            MarketError::Validation(_) => "VALIDATION_ERROR",
            MarketError::NotFound(_) => "NOT_FOUND",
            MarketError::InvalidTransition { .. } => "INVALID_TRANSITION",
            MarketError::DuplicateBid { .. } => "DUPLICATE_BID",
            MarketError::JobNotOpen { .. } => "JOB_NOT_OPEN",
            MarketError::ConflictingState(_) => "CONFLICTING_STATE",
        }
    }

    /// Whether the caller may retry the same request after re-fetching
    /// current state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MarketError::ConflictingState(_))
    }
}

/// Convenience alias used throughout the core.
pub type MarketResult<T> = Result<T, MarketError>;
