//! Category listing endpoint (external catalog pass-through).

use actix_web::{get, web, HttpResponse, Responder};
use kaarigar_core::AppContext;
use std::sync::Arc;

/// GET /v1/api/categories - The service category taxonomy
///
/// Read-only view over the external catalog, for the browse filter and the
/// job posting form.
#[get("/categories")]
pub async fn list_categories(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    HttpResponse::Ok().json(ctx.categories.all())
}
