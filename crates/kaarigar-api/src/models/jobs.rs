//! Job request/response models.

use crate::models::BidView;
use bigdecimal::BigDecimal;
use kaarigar_commons::{Job, JobStatus};
use kaarigar_core::services::JobSummary;
use serde::{Deserialize, Serialize};

/// Body of `POST /jobs`.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub location: String,
    pub budget: Option<BigDecimal>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Query string of `GET /jobs`. All fields optional; omitted status means
/// the browse default (open).
#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub category_id: Option<i64>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /jobs/{id}/assign_provider`.
#[derive(Debug, Deserialize)]
pub struct AssignProviderRequest {
    pub provider_id: i64,
}

/// A job as returned by mutation endpoints and nested in detail views.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: i64,
    pub seeker_id: i64,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub location: String,
    pub budget: Option<BigDecimal>,
    pub status: JobStatus,
    pub assigned_provider_id: Option<i64>,
    pub image_urls: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.as_i64(),
            seeker_id: job.seeker_id.as_i64(),
            title: job.title,
            description: job.description,
            category_id: job.category_id.as_i64(),
            location: job.location,
            budget: job.budget,
            status: job.status,
            assigned_provider_id: job.assigned_provider_id.map(|id| id.as_i64()),
            image_urls: job.image_urls,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// One row of `GET /jobs`: the job plus the denormalized listing fields the
/// browse view renders (category name, bid count).
#[derive(Debug, Serialize)]
pub struct JobSummaryResponse {
    #[serde(flatten)]
    pub job: JobResponse,
    pub category_name: Option<String>,
    pub bid_count: usize,
}

impl From<JobSummary> for JobSummaryResponse {
    fn from(summary: JobSummary) -> Self {
        Self {
            job: summary.job.into(),
            category_name: summary.category_name,
            bid_count: summary.bid_count,
        }
    }
}

/// `GET /jobs/{id}`: the job with its full bid ledger nested.
#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    #[serde(flatten)]
    pub job: JobResponse,
    pub category_name: Option<String>,
    pub bids: Vec<BidView>,
}
