// ABOUTME: Structured logging setup for observability and debugging
// ABOUTME: Configures the tracing subscriber with env-filter and a selectable format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! Production logging configuration with structured output

use crate::config::{LogFormat, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vayu_core::errors::{AppError, AppResult};

/// Initialize the global tracing subscriber from the server configuration
///
/// The `RUST_LOG` environment variable, when set, overrides the configured
/// level for fine-grained per-module filtering.
///
/// # Errors
///
/// Returns `AppError::ConfigError` if a subscriber is already installed or
/// the filter directive is invalid.
pub fn init(config: &ServerConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| AppError::config(format!("Invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    };

    result.map_err(|e| AppError::config(format!("Failed to install tracing subscriber: {e}")))
}
