// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads env vars with documented defaults and logs a startup summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use vayu_core::constants::env_config;
use vayu_core::errors::{AppError, AppResult};
use vayu_providers::geocoding::DEFAULT_GEOCODING_BASE_URL;
use vayu_providers::nasa_power::DEFAULT_NASA_POWER_BASE_URL;
use vayu_providers::open_meteo::DEFAULT_OPEN_METEO_BASE_URL;

/// Default HTTP listen port
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default SQLite database URL
const DEFAULT_DATABASE_URL: &str = "sqlite:data/vayu.db";

/// Default upstream request timeout in seconds
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default upstream connect timeout in seconds
const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Log output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Base URLs of the upstream weather APIs
#[derive(Debug, Clone)]
pub struct ProviderUrls {
    /// NASA POWER API base URL
    pub nasa_power: String,
    /// Open-Meteo forecast API base URL
    pub open_meteo: String,
    /// Open-Meteo geocoding API base URL
    pub geocoding: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Upstream weather API base URLs
    pub providers: ProviderUrls,
    /// Upstream request timeout in seconds
    pub http_timeout_secs: u64,
    /// Upstream connect timeout in seconds
    pub http_connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables, substituting
    /// documented defaults for anything unset
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigError` when a set variable fails to parse
    /// (e.g. a non-numeric port).
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http_port: parse_env(env_config::HTTP_PORT, DEFAULT_HTTP_PORT)?,
            database_url: env_or(env_config::DATABASE_URL, DEFAULT_DATABASE_URL),
            log_level: env_or(env_config::LOG_LEVEL, "info"),
            log_format: LogFormat::from_str_or_default(&env_or(env_config::LOG_FORMAT, "pretty")),
            providers: ProviderUrls {
                nasa_power: env_or(
                    env_config::NASA_POWER_BASE_URL,
                    DEFAULT_NASA_POWER_BASE_URL,
                ),
                open_meteo: env_or(
                    env_config::OPEN_METEO_BASE_URL,
                    DEFAULT_OPEN_METEO_BASE_URL,
                ),
                geocoding: env_or(env_config::GEOCODING_BASE_URL, DEFAULT_GEOCODING_BASE_URL),
            },
            http_timeout_secs: parse_env(
                env_config::HTTP_TIMEOUT_SECS,
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?,
            http_connect_timeout_secs: parse_env(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} log={}/{:?} nasa={} open_meteo={}",
            self.http_port,
            self.database_url,
            self.log_level,
            self.log_format,
            self.providers.nasa_power,
            self.providers.open_meteo
        )
    }
}

/// Read an env var, substituting the default when unset or empty
fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_owned(),
    }
}

/// Read and parse an env var, substituting the default when unset
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().parse().map_err(|_| {
            AppError::config(format!("Invalid value for {key}: '{value}'"))
        }),
        _ => Ok(default),
    }
}
