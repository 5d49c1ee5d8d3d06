//! Kaarigar identity context.
//!
//! Resolves a caller credential (a bearer token issued by the external
//! authentication component) to an account id and exactly one role.
//! Side-effect free: this crate never mutates market state, it only answers
//! "who is calling?" so the core's authorization guard can decide "may
//! they?".

pub mod directory;
pub mod error;
pub mod extractor;

pub use directory::{AccountDirectory, InMemoryAccountDirectory};
pub use error::{AuthError, AuthResult};
pub use extractor::{extract_auth, AuthenticatedRequest};
