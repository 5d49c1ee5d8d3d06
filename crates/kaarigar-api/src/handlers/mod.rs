//! HTTP handlers.
//!
//! Every mutating handler follows the same shape: resolve the caller's
//! identity, hand it explicitly to the core service, map the result (or the
//! structured failure) onto the wire.

pub mod bid_handler;
pub mod category_handler;
pub mod job_handler;

pub use bid_handler::{accept_bid, list_my_bids, reject_bid, submit_bid};
pub use category_handler::list_categories;
pub use job_handler::{
    assign_provider, cancel_job, complete_job, create_job, get_job, list_jobs,
};

use crate::models::ErrorBody;
use actix_web::{HttpRequest, HttpResponse};
use kaarigar_auth::{extract_auth, AccountDirectory};
use kaarigar_core::Identity;
use std::sync::Arc;

/// Resolve the caller or produce the 401 response to return as-is.
pub(crate) fn authenticate(
    req: &HttpRequest,
    directory: &Arc<dyn AccountDirectory>,
) -> Result<Identity, HttpResponse> {
    match extract_auth(req, directory) {
        Ok(auth) => Ok(Identity::new(auth.account_id, auth.role)),
        Err(err) => Err(ErrorBody::unauthenticated(err.to_string())),
    }
}
