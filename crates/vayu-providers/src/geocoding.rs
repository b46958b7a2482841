// ABOUTME: Location name to coordinates resolution via the Open-Meteo geocoding API
// ABOUTME: Returns the best-matching place with its canonical name and timezone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use crate::http_client::shared_client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vayu_core::errors::{AppError, AppResult};

/// Default Open-Meteo geocoding API base URL
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// A location name resolved to coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Canonical place name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name, when known
    pub country: Option<String>,
    /// IANA timezone identifier, when known
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    timezone: Option<String>,
}

/// Open-Meteo geocoding client
#[derive(Debug, Clone)]
pub struct Geocoder {
    base_url: String,
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODING_BASE_URL)
    }
}

impl Geocoder {
    /// Create a geocoder against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve a location name to coordinates
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` when the name matches nothing,
    /// or an external-service error when the geocoding API is unreachable.
    pub async fn resolve(&self, location: &str) -> AppResult<ResolvedLocation> {
        let url = format!("{}/search", self.base_url);
        let response = shared_client()
            .get(&url)
            .query(&[
                ("name", location),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("geocoding", format!("request failed: {e}"))
            })?
            .error_for_status()
            .map_err(|e| AppError::external_service("geocoding", format!("bad status: {e}")))?;

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            AppError::external_service("geocoding", format!("invalid response body: {e}"))
        })?;

        let Some(best) = body.results.into_iter().next() else {
            return Err(AppError::not_found(format!("location '{location}'")));
        };

        debug!(
            query = %location,
            resolved = %best.name,
            lat = best.latitude,
            lon = best.longitude,
            "geocoding resolved"
        );

        Ok(ResolvedLocation {
            name: best.name,
            latitude: best.latitude,
            longitude: best.longitude,
            country: best.country,
            timezone: best.timezone,
        })
    }
}
