//! Job endpoints.

use crate::handlers::authenticate;
use crate::models::{
    AssignProviderRequest, BidView, CreateJobRequest, ErrorBody, JobDetailResponse, JobListQuery,
    JobResponse, JobSummaryResponse,
};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use kaarigar_auth::AccountDirectory;
use kaarigar_commons::{AccountId, CategoryId, JobId};
use kaarigar_core::services::{JobFilter, NewJob};
use kaarigar_core::AppContext;
use std::str::FromStr;
use std::sync::Arc;

/// POST /v1/api/jobs - Create a job posting
///
/// The posting is owned by the authenticated seeker and starts `open`.
#[post("/jobs")]
pub async fn create_job(
    http_req: HttpRequest,
    req: web::Json<CreateJobRequest>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    let req = req.into_inner();
    let new_job = NewJob {
        title: req.title,
        description: req.description,
        category_id: CategoryId::new(req.category_id),
        location: req.location,
        budget: req.budget,
        image_urls: req.image_urls,
    };

    match ctx.jobs.create(&identity, new_job) {
        Ok(job) => HttpResponse::Created().json(JobResponse::from(job)),
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// GET /v1/api/jobs - Browse job postings
///
/// Filters AND together; an omitted status means the default browse view
/// (open jobs). Rows are most-recent-first and carry the denormalized
/// category name and bid count.
#[get("/jobs")]
pub async fn list_jobs(
    query: web::Query<JobListQuery>,
    ctx: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let status = match &query.status {
        Some(raw) => match kaarigar_commons::JobStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(err) => {
                return HttpResponse::BadRequest().json(ErrorBody::new("VALIDATION_ERROR", err))
            }
        },
        None => None,
    };

    let filter = JobFilter {
        category_id: query.category_id.map(CategoryId::new),
        location: query.location.clone(),
        status,
    };

    let rows: Vec<JobSummaryResponse> = ctx
        .queries
        .list_jobs(&filter)
        .into_iter()
        .map(JobSummaryResponse::from)
        .collect();
    HttpResponse::Ok().json(rows)
}

/// GET /v1/api/jobs/{id} - Job detail with its full bid ledger
#[get("/jobs/{id}")]
pub async fn get_job(path: web::Path<i64>, ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    let job_id = JobId::new(path.into_inner());

    let job = match ctx.jobs.get(job_id) {
        Ok(job) => job,
        Err(err) => return ErrorBody::from_market_error(&err),
    };

    let bids = match ctx.bids.list_for_job(job_id) {
        Ok(bids) => bids,
        Err(err) => return ErrorBody::from_market_error(&err),
    };

    let category_name = ctx.categories.name_of(job.category_id);
    let bids = bids
        .into_iter()
        .map(|bid| {
            let provider_name = ctx.profiles.display_name(bid.provider_id);
            BidView::from_bid(bid, provider_name)
        })
        .collect();

    HttpResponse::Ok().json(JobDetailResponse {
        job: JobResponse::from(job),
        category_name,
        bids,
    })
}

/// POST /v1/api/jobs/{id}/assign_provider - Accept that provider's pending bid
///
/// The seeker-facing spelling of bid acceptance: picking a provider accepts
/// their pending bid, rejects the competition, and assigns the job.
#[post("/jobs/{id}/assign_provider")]
pub async fn assign_provider(
    http_req: HttpRequest,
    path: web::Path<i64>,
    req: web::Json<AssignProviderRequest>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    let job_id = JobId::new(path.into_inner());
    let provider_id = AccountId::new(req.provider_id);

    match ctx.bids.assign_provider(&identity, job_id, provider_id) {
        Ok(job) => HttpResponse::Ok().json(JobResponse::from(job)),
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// POST /v1/api/jobs/{id}/cancel - Cancel an open job
#[post("/jobs/{id}/cancel")]
pub async fn cancel_job(
    http_req: HttpRequest,
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match ctx.jobs.cancel(&identity, JobId::new(path.into_inner())) {
        Ok(job) => HttpResponse::Ok().json(JobResponse::from(job)),
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// POST /v1/api/jobs/{id}/complete - Mark an assigned job's work done
#[post("/jobs/{id}/complete")]
pub async fn complete_job(
    http_req: HttpRequest,
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match ctx.jobs.complete(&identity, JobId::new(path.into_inner())) {
        Ok(job) => HttpResponse::Ok().json(JobResponse::from(job)),
        Err(err) => ErrorBody::from_market_error(&err),
    }
}
