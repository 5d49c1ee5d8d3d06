//! Request and response models.

mod bids;
mod error;
mod jobs;

pub use bids::{BidView, SubmitBidRequest};
pub use error::ErrorBody;
pub use jobs::{
    AssignProviderRequest, CreateJobRequest, JobDetailResponse, JobListQuery, JobResponse,
    JobSummaryResponse,
};
