//! End-to-end tests for the HTTP surface.
//!
//! Builds the actix application the way the server's lifecycle module does
//! and drives it with real requests, checking status codes and the
//! structured error bodies.

mod common;

use actix_web::{test, web, App};
use common::TestMarket;
use kaarigar_auth::AccountDirectory;
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! build_app {
    ($market:expr) => {{
        let directory: Arc<dyn AccountDirectory> = $market.directory.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::new($market.ctx.clone()))
                .app_data(web::Data::new(directory))
                .configure(kaarigar_api::routes::configure_routes),
        )
        .await
    }};
}

fn create_job_body() -> Value {
    json!({
        "title": "Fix kitchen sink",
        "description": "Leaking under the counter",
        "category_id": common::CATEGORY_PLUMBING,
        "location": "Karachi",
        "budget": "8000"
    })
}

fn bid_body(job_id: i64, cost: &str) -> Value {
    json!({
        "job_id": job_id,
        "proposed_cost": cost,
        "estimated_time": "2-3 days",
        "proposal_message": "Can start tomorrow"
    })
}

#[actix_web::test]
async fn test_healthcheck() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::get().uri("/v1/api/healthcheck").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_version"], "v1");
}

#[actix_web::test]
async fn test_create_job_requires_authentication() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::post()
        .uri("/v1/api/jobs")
        .set_json(create_job_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_provider_cannot_create_job() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::post()
        .uri("/v1/api/jobs")
        .insert_header(("Authorization", "Bearer tok-provider-a"))
        .set_json(create_job_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_job_and_bid_round_trip() {
    let market = TestMarket::new();
    let app = build_app!(market);

    // Seeker posts a job
    let req = test::TestRequest::post()
        .uri("/v1/api/jobs")
        .insert_header(("Authorization", "Bearer tok-seeker"))
        .set_json(create_job_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let job: Value = test::read_body_json(resp).await;
    let job_id = job["id"].as_i64().unwrap();
    assert_eq!(job["status"], "open");

    // It shows up in the default browse view with a bid count of zero
    let req = test::TestRequest::get().uri("/v1/api/jobs").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["id"].as_i64().unwrap(), job_id);
    assert_eq!(rows[0]["category_name"], "Plumbing");
    assert_eq!(rows[0]["bid_count"], 0);

    // Two providers bid
    let req = test::TestRequest::post()
        .uri("/v1/api/bids")
        .insert_header(("Authorization", "Bearer tok-provider-a"))
        .set_json(bid_body(job_id, "5000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let req = test::TestRequest::post()
        .uri("/v1/api/bids")
        .insert_header(("Authorization", "Bearer tok-provider-b"))
        .set_json(bid_body(job_id, "4500"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    // A second bid from the same provider is a structured conflict
    let req = test::TestRequest::post()
        .uri("/v1/api/bids")
        .insert_header(("Authorization", "Bearer tok-provider-a"))
        .set_json(bid_body(job_id, "4800"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "DUPLICATE_BID");

    // Detail view nests both bids, enriched with display names
    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/jobs/{}", job_id))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    let bids = detail["bids"].as_array().unwrap();
    assert_eq!(bids.len(), 2);
    assert_eq!(bids[0]["provider_name"], "Provider A");

    // The seeker assigns provider B
    let req = test::TestRequest::post()
        .uri(&format!("/v1/api/jobs/{}/assign_provider", job_id))
        .insert_header(("Authorization", "Bearer tok-seeker"))
        .set_json(json!({ "provider_id": 21 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let assigned: Value = test::read_body_json(resp).await;
    assert_eq!(assigned["status"], "assigned");
    assert_eq!(assigned["assigned_provider_id"].as_i64().unwrap(), 21);

    // Provider A's bid was rejected by the assignment
    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/jobs/{}", job_id))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    let statuses: Vec<&str> = detail["bids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"accepted"));
    assert!(statuses.contains(&"rejected"));

    // A late bid bounces off the closed job
    let req = test::TestRequest::post()
        .uri("/v1/api/bids")
        .insert_header(("Authorization", "Bearer tok-provider-c"))
        .set_json(bid_body(job_id, "4000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "JOB_NOT_OPEN");

    // The seeker marks the work done
    let req = test::TestRequest::post()
        .uri(&format!("/v1/api/jobs/{}/complete", job_id))
        .insert_header(("Authorization", "Bearer tok-seeker"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let completed: Value = test::read_body_json(resp).await;
    assert_eq!(completed["status"], "completed");
}

#[actix_web::test]
async fn test_cancel_endpoint_and_invalid_transition() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let job = market.open_job();
    let bid = market.pending_bid(job.id, &market.provider_a, 5000);
    market.ctx.bids.accept(&market.seeker, bid.id).unwrap();

    // Cancelling an assigned job is a structured 409
    let req = test::TestRequest::post()
        .uri(&format!("/v1/api/jobs/{}/cancel", job.id))
        .insert_header(("Authorization", "Bearer tok-seeker"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_TRANSITION");
}

#[actix_web::test]
async fn test_unknown_job_is_404() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::get().uri("/v1/api/jobs/987654321").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_invalid_status_filter_is_400() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::get()
        .uri("/v1/api/jobs?status=bogus")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_categories_listing() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let req = test::TestRequest::get().uri("/v1/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Plumbing", "Electrical"]);
}

#[actix_web::test]
async fn test_provider_lists_own_bids() {
    let market = TestMarket::new();
    let app = build_app!(market);

    let job = market.open_job();
    market.pending_bid(job.id, &market.provider_a, 5000);

    let req = test::TestRequest::get()
        .uri("/v1/api/bids")
        .insert_header(("Authorization", "Bearer tok-provider-a"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let bids = body.as_array().unwrap();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0]["job_id"].as_i64().unwrap(), job.id.as_i64());
}
