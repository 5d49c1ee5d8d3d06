//! API routes configuration
//!
//! This module configures all HTTP routes for the Kaarigar API.

use crate::handlers;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Configure API routes for Kaarigar
///
/// All endpoints use the /v1 version prefix:
/// - POST /v1/api/jobs - Create a job posting (seeker)
/// - GET  /v1/api/jobs - Browse job postings with filters
/// - GET  /v1/api/jobs/{id} - Job detail with nested bids
/// - POST /v1/api/jobs/{id}/assign_provider - Accept a provider's pending bid (owner)
/// - POST /v1/api/jobs/{id}/cancel - Cancel an open job (owner)
/// - POST /v1/api/jobs/{id}/complete - Mark an assigned job done (owner)
/// - POST /v1/api/bids - Submit a bid (provider)
/// - POST /v1/api/bids/{id}/accept - Accept a pending bid (owner)
/// - POST /v1/api/bids/{id}/reject - Reject a pending bid (owner)
/// - GET  /v1/api/bids - The caller's own bids
/// - GET  /v1/api/categories - Category taxonomy
/// - GET  /v1/api/healthcheck - Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1").service(
            web::scope("/api")
                .service(handlers::create_job)
                .service(handlers::list_jobs)
                .service(handlers::get_job)
                .service(handlers::assign_provider)
                .service(handlers::cancel_job)
                .service(handlers::complete_job)
                .service(handlers::submit_bid)
                .service(handlers::accept_bid)
                .service(handlers::reject_bid)
                .service(handlers::list_my_bids)
                .service(handlers::list_categories)
                .route("/healthcheck", web::get().to(healthcheck_handler)),
        ),
    );
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "build_date": env!("BUILD_DATE")
    }))
}
