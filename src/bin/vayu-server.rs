// ABOUTME: VAYU server binary wiring config, database, providers, and the HTTP listener
// ABOUTME: Parses CLI overrides, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # VAYU Server Binary
//!
//! Starts the weather comfort API: environment configuration with CLI
//! overrides, structured logging, SQLite storage, the NASA POWER /
//! Open-Meteo provider chain, and the axum HTTP listener.

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use vayu_server::comfort::AdaptiveModel;
use vayu_server::config::ServerConfig;
use vayu_server::database::Database;
use vayu_server::errors::{AppError, AppResult};
use vayu_server::logging;
use vayu_server::providers::{
    initialize_shared_client, Geocoder, NasaPowerProvider, OpenMeteoProvider, WeatherProvider,
    WeatherService,
};
use vayu_server::routes::{self, AppState};

#[derive(Parser)]
#[command(name = "vayu-server")]
#[command(about = "VAYU Weather API - personalized weather comfort scoring")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    logging::init(&config)?;
    info!("Starting VAYU weather comfort server");
    info!("{}", config.summary());

    initialize_shared_client(config.http_timeout_secs, config.http_connect_timeout_secs);

    let database = Arc::new(Database::new(&config.database_url).await?);
    info!("Database initialized: {}", config.database_url);

    let providers: Vec<Arc<dyn WeatherProvider>> = vec![
        Arc::new(NasaPowerProvider::new(config.providers.nasa_power.clone())),
        Arc::new(OpenMeteoProvider::new(config.providers.open_meteo.clone())),
    ];
    let weather = Arc::new(WeatherService::new(
        Geocoder::new(config.providers.geocoding.clone()),
        providers,
    ));

    let adaptive = Arc::new(AdaptiveModel::new(database.clone(), database.clone()));

    let state = Arc::new(AppState {
        database,
        weather,
        adaptive,
    });

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!("Listening on {addr}");

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("VAYU server stopped");
    Ok(())
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
    }
}
