//! # Vehicles API
//!
//! Main entry point for the vehicle record service.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vehicles_api::api::rest::{AppState, create_router};
use vehicles_api::application::services::{EnrichmentConfig, VehicleService};
use vehicles_api::config::{AppConfig, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE, LogConfig, LogFormat};
use vehicles_api::infrastructure::clients::{MapsClient, PricingClient};
use vehicles_api::infrastructure::persistence::in_memory::InMemoryVehicleRepository;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "vehicles-api", version, about = "Vehicle record service")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = CONFIG_FILE_ENV, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config))?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log);
    info!(
        "Starting {} v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let pricing = PricingClient::new(&config.pricing.url, config.pricing.timeout_ms)
        .context("building pricing client")?;
    let maps = MapsClient::new(&config.maps.url, config.maps.timeout_ms)
        .context("building maps client")?;
    let enrichment = EnrichmentConfig::default()
        .with_price_timeout(config.pricing.timeout_ms)
        .with_location_timeout(config.maps.timeout_ms);

    let service = VehicleService::new(
        Arc::new(InMemoryVehicleRepository::new()),
        Arc::new(pricing),
        Arc::new(maps),
        enrichment,
    );
    let state = Arc::new(AppState {
        service: Arc::new(service),
    });
    let router = create_router(state, config.rest.enable_cors);

    let addr = config.rest.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        pricing = %config.pricing.url,
        maps = %config.maps.url,
        "REST server listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down {}", config.service_name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
