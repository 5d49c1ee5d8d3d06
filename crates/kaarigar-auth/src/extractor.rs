//! HTTP request authentication extractor.
//!
//! Extracts the bearer token from the `Authorization` header and resolves
//! it through the account directory.

use crate::directory::AccountDirectory;
use crate::error::{AuthError, AuthResult};
use actix_web::HttpRequest;
use kaarigar_commons::{AccountId, Role};
use log::warn;
use std::sync::Arc;

/// Authenticated caller information extracted from an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedRequest {
    pub account_id: AccountId,
    pub role: Role,
    pub email: String,
}

/// Extract and validate authentication from an HTTP request.
///
/// Expects `Authorization: Bearer <token>`; the token is resolved through
/// the directory, which is the external session store's seam.
pub fn extract_auth(
    req: &HttpRequest,
    directory: &Arc<dyn AccountDirectory>,
) -> AuthResult<AuthenticatedRequest> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| {
            AuthError::MissingAuthorization(
                "Authorization header is required. Use 'Authorization: Bearer <token>'".to_string(),
            )
        })?
        .to_str()
        .map_err(|_| {
            AuthError::MalformedAuthorization(
                "Authorization header contains invalid characters".to_string(),
            )
        })?;

    let token = auth_header
        .strip_prefix("Bearer")
        .ok_or_else(|| {
            AuthError::MalformedAuthorization(
                "Only 'Bearer <token>' authorization is supported".to_string(),
            )
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedAuthorization(
            "Bearer token missing".to_string(),
        ));
    }

    match directory.resolve_token(token) {
        Some(account) => Ok(AuthenticatedRequest {
            account_id: account.id,
            role: account.role,
            email: account.email,
        }),
        None => {
            warn!("Rejected request with unknown bearer token");
            Err(AuthError::InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryAccountDirectory;
    use actix_web::test::TestRequest;

    fn directory_with_token() -> Arc<dyn AccountDirectory> {
        let directory = InMemoryAccountDirectory::new();
        directory.seed("good-token", 10, Role::Provider, "p@example.com");
        Arc::new(directory)
    }

    #[test]
    fn test_valid_bearer_token() {
        let directory = directory_with_token();
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer good-token"))
            .to_http_request();

        let auth = extract_auth(&req, &directory).unwrap();
        assert_eq!(auth.account_id, AccountId::new(10));
        assert_eq!(auth.role, Role::Provider);
    }

    #[test]
    fn test_missing_header() {
        let directory = directory_with_token();
        let req = TestRequest::default().to_http_request();
        assert!(matches!(
            extract_auth(&req, &directory),
            Err(AuthError::MissingAuthorization(_))
        ));
    }

    #[test]
    fn test_non_bearer_scheme() {
        let directory = directory_with_token();
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(matches!(
            extract_auth(&req, &directory),
            Err(AuthError::MalformedAuthorization(_))
        ));
    }

    #[test]
    fn test_empty_and_unknown_tokens() {
        let directory = directory_with_token();

        let empty = TestRequest::default()
            .insert_header(("Authorization", "Bearer   "))
            .to_http_request();
        assert!(matches!(
            extract_auth(&empty, &directory),
            Err(AuthError::MalformedAuthorization(_))
        ));

        let unknown = TestRequest::default()
            .insert_header(("Authorization", "Bearer nope"))
            .to_http_request();
        assert_eq!(extract_auth(&unknown, &directory), Err(AuthError::InvalidToken));
    }
}
