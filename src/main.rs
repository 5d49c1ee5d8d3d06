// Kaarigar Server entrypoint
//!
//! The heavy lifting (bootstrap, middleware wiring, shutdown) lives in
//! dedicated modules so this file remains a thin orchestrator.

use anyhow::Result;
use kaarigar_server::config::ServerConfig;
use kaarigar_server::lifecycle::{bootstrap, run};
use kaarigar_server::logging;
use log::info;
use std::env;

#[actix_web::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.toml");

    // Load configuration; the server cannot start without one
    let config = match ServerConfig::from_file(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: Failed to load {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    // Logging before any other side effects
    let server_log_path = format!("{}/server.log", config.logging.logs_path);
    logging::init_logging(
        &config.logging.level,
        &server_log_path,
        config.logging.log_to_console,
        Some(&config.logging.targets),
        &config.logging.format,
    )?;

    info!(
        "Kaarigar Server v{} (commit {}, branch {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_COMMIT_HASH"),
        env!("GIT_BRANCH"),
        env!("BUILD_DATE"),
    );

    let components = bootstrap(&config)?;
    run(config, components).await
}
