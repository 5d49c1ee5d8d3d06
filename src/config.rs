// Configuration module
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub limits: LimitsSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// API version prefix for endpoints (default: "v1")
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_logs_path")]
    pub logs_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Per-target level overrides, e.g. `kaarigar_core = "debug"`
    #[serde(default)]
    pub targets: HashMap<String, String>,
}

/// Limits settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsSettings {
    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_payload_size: default_max_payload_size(),
        }
    }
}

/// Authentication settings.
///
/// Session issuance is external; the server only needs tokens to seed into
/// the in-memory directory. `admin_token`, if set, creates an admin account
/// on startup (development/testing convenience). `accounts` seeds further
/// dev accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
}

/// A development account seeded into the directory at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub token: String,
    pub id: i64,
    /// "seeker", "provider", or "admin"
    pub role: String,
    pub email: String,
    /// Display name registered in the provider profile lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Category catalog seed (the taxonomy is managed externally; this is the
/// read-side snapshot the server starts with).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_categories")]
    pub categories: Vec<SeedCategory>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    pub id: i64,
    pub name: String,
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.server.workers == 0 {
            anyhow::bail!("server.workers must be non-zero");
        }
        Ok(())
    }
}

fn default_workers() -> usize {
    4
}

fn default_api_version() -> String {
    "v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_logs_path() -> String {
    "logs".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_payload_size() -> usize {
    // 256 KB is plenty for job postings and bids
    256 * 1024
}

fn default_categories() -> Vec<SeedCategory> {
    [
        (1, "Plumbing"),
        (2, "Electrical"),
        (3, "Carpentry"),
        (4, "Painting"),
        (5, "Cleaning"),
        (6, "AC Repair"),
    ]
    .into_iter()
    .map(|(id, name)| SeedCategory {
        id,
        name: name.to_string(),
    })
    .collect()
}
