//! Bid endpoints.

use crate::handlers::authenticate;
use crate::models::{BidView, ErrorBody, SubmitBidRequest};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use kaarigar_auth::AccountDirectory;
use kaarigar_commons::{BidId, JobId};
use kaarigar_core::services::NewBid;
use kaarigar_core::AppContext;
use std::sync::Arc;

/// POST /v1/api/bids - Submit a bid on an open job
///
/// The bidding provider is the authenticated caller; the body only carries
/// the offer itself.
#[post("/bids")]
pub async fn submit_bid(
    http_req: HttpRequest,
    req: web::Json<SubmitBidRequest>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    let req = req.into_inner();
    let new_bid = NewBid {
        job_id: JobId::new(req.job_id),
        proposed_cost: req.proposed_cost,
        estimated_time: req.estimated_time,
        proposal_message: req.proposal_message,
    };

    match ctx.bids.submit(&identity, new_bid) {
        Ok(bid) => {
            let provider_name = ctx.profiles.display_name(bid.provider_id);
            HttpResponse::Created().json(BidView::from_bid(bid, provider_name))
        }
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// POST /v1/api/bids/{id}/accept - Accept a pending bid
///
/// Rejects every competing pending bid and assigns the job in the same
/// atomic unit; a lost race surfaces as `CONFLICTING_STATE`.
#[post("/bids/{id}/accept")]
pub async fn accept_bid(
    http_req: HttpRequest,
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match ctx.bids.accept(&identity, BidId::new(path.into_inner())) {
        Ok(bid) => {
            let provider_name = ctx.profiles.display_name(bid.provider_id);
            HttpResponse::Ok().json(BidView::from_bid(bid, provider_name))
        }
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// POST /v1/api/bids/{id}/reject - Reject a single pending bid
#[post("/bids/{id}/reject")]
pub async fn reject_bid(
    http_req: HttpRequest,
    path: web::Path<i64>,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match ctx.bids.reject(&identity, BidId::new(path.into_inner())) {
        Ok(bid) => {
            let provider_name = ctx.profiles.display_name(bid.provider_id);
            HttpResponse::Ok().json(BidView::from_bid(bid, provider_name))
        }
        Err(err) => ErrorBody::from_market_error(&err),
    }
}

/// GET /v1/api/bids - The authenticated caller's own bids, newest first
#[get("/bids")]
pub async fn list_my_bids(
    http_req: HttpRequest,
    ctx: web::Data<Arc<AppContext>>,
    directory: web::Data<Arc<dyn AccountDirectory>>,
) -> impl Responder {
    let identity = match authenticate(&http_req, directory.get_ref()) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    let name = ctx.profiles.display_name(identity.account_id);
    let bids: Vec<BidView> = ctx
        .bids
        .list_for_provider(identity.account_id)
        .into_iter()
        .map(|bid| BidView::from_bid(bid, name.clone()))
        .collect();
    HttpResponse::Ok().json(bids)
}
