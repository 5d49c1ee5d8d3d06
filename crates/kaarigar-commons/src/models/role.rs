//! Account role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single role an account holds.
///
/// Roles are mutually exclusive: an account is a seeker, a provider, or an
/// admin, never a combination. Modelling this as a closed enum (rather than
/// independent flags) makes impossible states unrepresentable.
///
/// - `Seeker`: posts jobs, accepts/rejects bids on its own jobs
/// - `Provider`: submits bids on open jobs
/// - `Admin`: unrestricted transition and accept rights across all jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Seeker,
    Provider,
    Admin,
}

impl Role {
    /// True for the admin role, which bypasses ownership checks everywhere.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seeker => "seeker",
            Role::Provider => "provider",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seeker" => Ok(Role::Seeker),
            "provider" => Ok(Role::Provider),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: '{}'", other)),
        }
    }
}
