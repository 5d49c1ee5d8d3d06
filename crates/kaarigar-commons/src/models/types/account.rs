//! Account entity.

use crate::ids::AccountId;
use crate::models::Role;
use serde::{Deserialize, Serialize};

/// An authenticated account as resolved by the identity directory.
///
/// Registration, login, and password handling live outside this core; the
/// directory hands us the already-resolved identity. The role is immutable
/// for the lifetime of the account as far as this core is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub role: Role,
    /// Display-only; never used for authorization decisions.
    pub email: String,
}

impl Account {
    pub fn new(id: AccountId, role: Role, email: impl Into<String>) -> Self {
        Self {
            id,
            role,
            email: email.into(),
        }
    }
}
