//! Account directory abstraction.
//!
//! Session issuance and password handling live in the external
//! authentication component; this core only needs to map an already-issued
//! token to an account. The trait keeps that seam explicit so the server
//! can plug a real session store while tests seed fixtures.

use dashmap::DashMap;
use kaarigar_commons::{Account, AccountId, Role};

/// Token → account resolution.
pub trait AccountDirectory: Send + Sync {
    /// Resolve a bearer token to the account it was issued for.
    fn resolve_token(&self, token: &str) -> Option<Account>;
}

/// In-memory directory for development and tests.
pub struct InMemoryAccountDirectory {
    tokens: DashMap<String, Account>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Register a token for an account. Later registrations of the same
    /// token overwrite earlier ones.
    pub fn register(&self, token: impl Into<String>, account: Account) {
        self.tokens.insert(token.into(), account);
    }

    /// Convenience for seeding: build and register an account in one call.
    pub fn seed(&self, token: impl Into<String>, id: i64, role: Role, email: &str) -> Account {
        let account = Account::new(AccountId::new(id), role, email);
        self.register(token, account.clone());
        account
    }
}

impl Default for InMemoryAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn resolve_token(&self, token: &str) -> Option<Account> {
        self.tokens.get(token).map(|account| account.clone())
    }
}
