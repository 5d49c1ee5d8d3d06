//! Caller identity.

use kaarigar_commons::{AccountId, Role};

/// The resolved identity of a caller, passed explicitly into every core
/// operation.
///
/// There is deliberately no ambient "current user": a service call that
/// mutates state takes the identity as an argument, so the permission check
/// is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub account_id: AccountId,
    pub role: Role,
}

impl Identity {
    pub fn new(account_id: AccountId, role: Role) -> Self {
        Self { account_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
