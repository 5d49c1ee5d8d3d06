//! Error response body.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use kaarigar_core::MarketError;
use serde::Serialize;

/// The wire shape of every failure: `{"error": {"code", "message"}}`.
///
/// Codes are stable and machine-readable; messages are for humans. Each
/// taxonomy entry keeps its own code so callers can distinguish, say, a
/// `DUPLICATE_BID` from a `JOB_NOT_OPEN` without string matching.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    /// Map a core error to its HTTP response.
    pub fn from_market_error(err: &MarketError) -> HttpResponse {
        let status = match err {
            MarketError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            MarketError::Forbidden(_) => StatusCode::FORBIDDEN,
            MarketError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketError::NotFound(_) => StatusCode::NOT_FOUND,
            MarketError::InvalidTransition { .. }
            | MarketError::DuplicateBid { .. }
            | MarketError::JobNotOpen { .. }
            | MarketError::ConflictingState(_) => StatusCode::CONFLICT,
        };
        HttpResponse::build(status).json(ErrorBody::new(err.code(), err.to_string()))
    }

    /// 401 for any identity-resolution failure.
    pub fn unauthenticated(message: impl Into<String>) -> HttpResponse {
        HttpResponse::Unauthorized().json(ErrorBody::new("UNAUTHENTICATED", message))
    }
}
