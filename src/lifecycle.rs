//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting that would otherwise live in
//! `main.rs`: bootstrapping the application context and identity directory
//! from configuration, wiring the HTTP server, and graceful shutdown.

use crate::config::ServerConfig;
use crate::middleware;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use kaarigar_auth::{AccountDirectory, InMemoryAccountDirectory};
use kaarigar_commons::{AccountId, Category, CategoryId, Role};
use kaarigar_core::providers::{InMemoryProviderProfiles, StaticCategoryCatalog};
use kaarigar_core::AppContext;
use log::{info, warn};
use std::str::FromStr;
use std::sync::Arc;

/// Aggregated application components shared across the HTTP server.
pub struct ApplicationComponents {
    pub app_context: Arc<AppContext>,
    pub directory: Arc<dyn AccountDirectory>,
}

/// Build the application context and identity directory from configuration.
pub fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    // Category catalog: read-side snapshot of the external taxonomy
    let categories: Vec<Category> = config
        .catalog
        .categories
        .iter()
        .map(|c| Category::new(CategoryId::new(c.id), c.name.clone()))
        .collect();
    info!("Category catalog seeded with {} categories", categories.len());
    let catalog = Arc::new(StaticCategoryCatalog::new(categories));

    // Provider profiles: display-name enrichment for bids
    let profiles = Arc::new(InMemoryProviderProfiles::new());

    // Identity directory: tokens are issued by the external auth component;
    // in this standalone binary we seed it from config.
    let directory = InMemoryAccountDirectory::new();
    if let Some(admin_token) = &config.auth.admin_token {
        directory.seed(admin_token.clone(), 1, Role::Admin, "admin@kaarigar.local");
        info!("Admin account seeded from config");
    }
    for seed in &config.auth.accounts {
        let role = match Role::from_str(&seed.role) {
            Ok(role) => role,
            Err(err) => {
                warn!("Skipping seed account '{}': {}", seed.email, err);
                continue;
            }
        };
        directory.seed(seed.token.clone(), seed.id, role, &seed.email);
        if let Some(display_name) = &seed.display_name {
            profiles.register(AccountId::new(seed.id), display_name.clone());
        }
    }
    if config.auth.admin_token.is_none() && config.auth.accounts.is_empty() {
        warn!("No accounts seeded; every authenticated request will be rejected");
    }

    let app_context = AppContext::init(catalog, profiles);

    Ok(ApplicationComponents {
        app_context,
        directory: Arc::new(directory),
    })
}

/// Run the HTTP server until it is shut down (ctrl-c).
pub async fn run(config: ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let workers = config.server.workers;
    let max_payload = config.limits.max_payload_size;

    let app_context = components.app_context;
    let directory = components.directory;

    info!("Starting HTTP server on {} ({} workers)", bind_addr, workers);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::build_cors())
            .wrap(middleware::request_logger())
            .app_data(web::JsonConfig::default().limit(max_payload))
            .app_data(web::Data::new(app_context.clone()))
            .app_data(web::Data::new(directory.clone()))
            .configure(kaarigar_api::routes::configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)
    .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
