//! Business services over the market store.
//!
//! Each service owns one slice of the lifecycle: `JobService` the job state
//! machine, `BidService` the bid ledger, `QueryService` the read-side
//! listing. All mutations consult the authorization guard first and run
//! their state re-checks inside the job's critical section.

pub mod bid_service;
pub mod job_service;
pub mod query_service;

pub use bid_service::{BidService, NewBid};
pub use job_service::{JobService, NewJob};
pub use query_service::{JobFilter, JobSummary, QueryService};

/// Current wall-clock time as Unix milliseconds.
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
