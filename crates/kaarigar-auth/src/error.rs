// Authentication error types
use thiserror::Error;

/// Failures while resolving a caller's identity.
///
/// All of these surface as `401 Unauthenticated` at the API edge; the
/// variants exist so logs and clients can tell a missing header from a
/// stale token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization: {0}")]
    MissingAuthorization(String),

    #[error("Malformed authorization: {0}")]
    MalformedAuthorization(String),

    #[error("Invalid token")]
    InvalidToken,
}

pub type AuthResult<T> = Result<T, AuthError>;
