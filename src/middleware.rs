//! Server-wide middleware configuration helpers.
//!
//! Keeps the Actix application setup focused by providing reusable
//! constructors for the CORS and request-logging layers.

use actix_cors::Cors;
use actix_web::middleware::Logger;

/// Build CORS middleware.
///
/// The browser client is served from a different origin during
/// development, so the API allows any origin; session tokens travel in the
/// Authorization header, not cookies, so this carries no credential risk.
pub fn build_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Request/response logger: method, path, status, and timing.
pub fn request_logger() -> Logger {
    Logger::new("%a \"%r\" %s %b %Dms")
}
