// ABOUTME: Primary-with-fallback weather provider chain and geocoding facade
// ABOUTME: Tries NASA POWER first, falls back to Open-Meteo, and reports provider inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Weather Service
//!
//! The single entry point the server uses to obtain weather data. Holds the
//! geocoder plus an ordered provider chain: the first provider that answers
//! wins, and a total miss across the chain means no score can be computed;
//! the service never fabricates an observation.

use crate::core::{ProviderStatus, WeatherProvider};
use crate::geocoding::{Geocoder, ResolvedLocation};
use std::sync::Arc;
use tracing::{info, warn};
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::CurrentWeather;

/// Geocoding plus an ordered weather provider chain
pub struct WeatherService {
    geocoder: Geocoder,
    providers: Vec<Arc<dyn WeatherProvider>>,
}

impl WeatherService {
    /// Create a service over an ordered provider chain
    ///
    /// The first provider is the primary source; the rest are fallbacks
    /// tried in order.
    #[must_use]
    pub fn new(geocoder: Geocoder, providers: Vec<Arc<dyn WeatherProvider>>) -> Self {
        Self {
            geocoder,
            providers,
        }
    }

    /// Resolve a location name to coordinates
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` for unknown locations or an
    /// external-service error when geocoding is unreachable.
    pub async fn resolve(&self, location: &str) -> AppResult<ResolvedLocation> {
        self.geocoder.resolve(location).await
    }

    /// Fetch current conditions, trying each provider in chain order
    ///
    /// # Errors
    ///
    /// Returns `AppError::ExternalServiceUnavailable` when every provider in
    /// the chain fails.
    pub async fn fetch_current(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        for provider in &self.providers {
            match provider.fetch_current(latitude, longitude).await {
                Ok(weather) => {
                    info!(provider = provider.name(), "weather data retrieved");
                    return Ok(weather);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                }
            }
        }

        Err(AppError::service_unavailable(
            "Weather data temporarily unavailable from all providers",
        ))
    }

    /// Provider inventory for the status endpoint
    #[must_use]
    pub fn provider_inventory(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .enumerate()
            .map(|(index, provider)| ProviderStatus {
                name: provider.name().to_owned(),
                role: if index == 0 { "primary" } else { "fallback" }.to_owned(),
                description: provider.description().to_owned(),
            })
            .collect()
    }
}
