// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Defaults for profiles and observations, score limits, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! Application constants organized by domain

/// Service identity constants
pub mod service {
    /// Service name used in structured logging and status responses
    pub const SERVICE_NAME: &str = "vayu-server";
}

/// Default values substituted for missing data
pub mod defaults {
    /// Default comfortable temperature band lower bound (°C)
    pub const TEMP_MIN: i32 = 18;
    /// Default comfortable temperature band upper bound (°C)
    pub const TEMP_MAX: i32 = 26;

    /// Temperature substituted when an observation omits it (°C)
    pub const OBSERVATION_TEMPERATURE: f64 = 20.0;
    /// Relative humidity substituted when an observation omits it (%)
    pub const OBSERVATION_HUMIDITY: f64 = 50.0;
    /// Wind speed substituted when an observation omits it (m/s)
    pub const OBSERVATION_WIND_SPEED: f64 = 0.0;
    /// Precipitation probability substituted when an observation omits it (%)
    pub const OBSERVATION_PRECIPITATION: f64 = 0.0;
}

/// Score range limits
pub mod limits {
    /// Minimum comfort score
    pub const SCORE_MIN: u8 = 0;
    /// Maximum comfort score
    pub const SCORE_MAX: u8 = 100;
}

/// Environment variable names read by `ServerConfig::from_env()`
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "VAYU_HTTP_PORT";
    /// SQLite database URL
    pub const DATABASE_URL: &str = "VAYU_DATABASE_URL";
    /// Log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "VAYU_LOG_LEVEL";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "VAYU_LOG_FORMAT";
    /// NASA POWER API base URL override
    pub const NASA_POWER_BASE_URL: &str = "VAYU_NASA_POWER_BASE_URL";
    /// Open-Meteo forecast API base URL override
    pub const OPEN_METEO_BASE_URL: &str = "VAYU_OPEN_METEO_BASE_URL";
    /// Open-Meteo geocoding API base URL override
    pub const GEOCODING_BASE_URL: &str = "VAYU_GEOCODING_BASE_URL";
    /// Upstream HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "VAYU_HTTP_TIMEOUT_SECS";
    /// Upstream HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "VAYU_HTTP_CONNECT_TIMEOUT_SECS";
}
