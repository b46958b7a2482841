// ABOUTME: Open-Meteo forecast provider used as the fallback weather source
// ABOUTME: Fetches current weather plus first-hour humidity and precipitation probability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Open-Meteo Provider
//!
//! Fallback weather source backed by Open-Meteo's numerical weather
//! prediction API. Unlike NASA POWER it serves real-time data, but the
//! observations carry the lower-trust `NumericalForecast` provenance.
//!
//! Wind speed is requested in m/s so the observation matches the unit the
//! comfort formula expects.

use crate::core::WeatherProvider;
use crate::http_client::shared_client;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::{CurrentWeather, Provenance, WeatherObservation};

/// Default Open-Meteo forecast API base URL
pub const DEFAULT_OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeatherBlock,
    #[serde(default)]
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    relativehumidity_2m: Vec<f64>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f64>>,
}

/// Open-Meteo weather provider (numerical forecast provenance)
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_METEO_BASE_URL)
    }
}

impl OpenMeteoProvider {
    /// Create a provider against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn name(&self) -> &'static str {
        "Open-Meteo"
    }

    fn description(&self) -> &'static str {
        "Real-time numerical weather prediction"
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        let url = format!("{}/forecast", self.base_url);
        let response = shared_client()
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("current_weather", "true"),
                (
                    "hourly",
                    "temperature_2m,relativehumidity_2m,windspeed_10m,precipitation_probability",
                ),
                ("windspeed_unit", "ms"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("Open-Meteo", format!("request failed: {e}"))
            })?
            .error_for_status()
            .map_err(|e| AppError::external_service("Open-Meteo", format!("bad status: {e}")))?;

        let body: ForecastResponse = response.json().await.map_err(|e| {
            AppError::external_service("Open-Meteo", format!("invalid response body: {e}"))
        })?;

        let humidity = body
            .hourly
            .as_ref()
            .and_then(|h| h.relativehumidity_2m.first())
            .copied();
        let precipitation_probability = body
            .hourly
            .as_ref()
            .and_then(|h| h.precipitation_probability.first())
            .copied()
            .flatten();

        debug!(
            lat = latitude,
            lon = longitude,
            temperature = body.current_weather.temperature,
            "Open-Meteo data retrieved"
        );

        Ok(CurrentWeather {
            observation: WeatherObservation {
                temperature: Some(body.current_weather.temperature),
                relative_humidity: humidity,
                wind_speed: Some(body.current_weather.windspeed),
                precipitation_probability,
            },
            provenance: Provenance::NumericalForecast,
            provider: "Open-Meteo".to_owned(),
            feels_like: None,
            dew_point: None,
            solar_irradiance: None,
            condition: None,
        })
    }
}
