//! # Catalog Store server
//!
//! Loads configuration, starts the collection actors, seeds startup data and serves the
//! HTTP API until Ctrl+C.

use anyhow::{Context, Result};
use catalog_store::api::{create_app, shutdown_signal, start_server};
use catalog_store::config::Config;
use catalog_store::lifecycle::{seed_all, setup_tracing, CatalogSystem};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("catalog-store")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Referential CRUD store for brands, categories, products, users and movies")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path (default: ./catalog.toml when present)"),
        )
        .arg(
            Arg::new("addr")
                .long("addr")
                .value_name("ADDR")
                .help("HTTP server bind address"),
        )
        .arg(
            Arg::new("storage")
                .long("storage")
                .value_name("KIND")
                .help("Storage backend (memory, json)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory for the json backend's snapshot files"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("RNG seed for reproducible fixtures"),
        )
        .arg(
            Arg::new("no-fixtures")
                .long("no-fixtures")
                .action(ArgAction::SetTrue)
                .help("Skip generated brands, categories, products and users"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level when RUST_LOG is unset (trace, debug, info, warn, error)"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = Config::load(config_path.as_deref())?;
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    setup_tracing(&config.logging.level);
    info!("Starting catalog store v{}", env!("CARGO_PKG_VERSION"));

    let system = CatalogSystem::start(&config.storage, &config.actors)
        .context("Storage initialization failed")?;

    seed_all(&system, &config.fixtures)
        .instrument(tracing::info_span!("fixtures"))
        .await?;

    let app = create_app(&system);
    start_server(config.server.http_addr, app, shutdown_signal())
        .await
        .with_context(|| format!("HTTP server on {} failed", config.server.http_addr))?;

    system.shutdown().await?;
    info!("Shutdown complete");
    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &clap::ArgMatches) -> Result<()> {
    if let Some(addr) = matches.get_one::<String>("addr") {
        config.server.http_addr = addr
            .parse()
            .with_context(|| format!("Invalid HTTP address: {}", addr))?;
    }

    if let Some(kind) = matches.get_one::<String>("storage") {
        config.storage.backend = kind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid storage kind: {}", e))?;
    }

    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config.storage.data_dir = dir.into();
    }

    if let Some(seed) = matches.get_one::<String>("seed") {
        config.fixtures.seed = Some(
            seed.parse()
                .with_context(|| format!("Invalid seed: {}", seed))?,
        );
    }

    if matches.get_flag("no-fixtures") {
        config.fixtures.enabled = false;
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(())
}
