// ABOUTME: Core provider trait for unified weather data access
// ABOUTME: Defines the WeatherProvider contract all upstream sources implement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Weather Provider Trait
//!
//! The shared contract every upstream weather source implements. Providers
//! accept coordinates and return a [`CurrentWeather`] carrying both the core
//! observation and its provenance. Provider-specific response formats stay
//! internal; only the shared model crosses the crate boundary.
//!
//! A fetch either succeeds with a complete `CurrentWeather` or fails with a
//! retrievable error. Providers never fabricate observations from defaults.

use async_trait::async_trait;
use serde::Serialize;
use vayu_core::errors::AppResult;
use vayu_core::models::CurrentWeather;

/// Unified interface for fetching current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Short provider name used in logs and API responses
    fn name(&self) -> &'static str;

    /// One-line description of the data source
    fn description(&self) -> &'static str;

    /// Fetch the current conditions at the given coordinates
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather>;
}

/// Provider inventory entry exposed by the status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    /// Provider name
    pub name: String,
    /// Role in the fallback chain ("primary" or "fallback")
    pub role: String,
    /// One-line description of the data source
    pub description: String,
}
