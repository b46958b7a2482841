// ABOUTME: The comfort scoring pipeline endpoint orchestrating the full request flow
// ABOUTME: geocode, fetch, formula score, log, retrain, predict, and blend by provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use vayu_comfort::{ComfortFormula, ScoreBlender};
use vayu_core::errors::AppResult;
use vayu_core::models::{ComfortResult, WeatherFeatures};
use vayu_providers::ResolvedLocation;

/// Location scored when neither the request nor the user carries one
const DEFAULT_LOCATION: &str = "New Delhi";

/// Query parameters for the comfort endpoint
#[derive(Debug, Deserialize)]
pub struct ComfortQuery {
    /// Location name; falls back to the user's last location
    pub location: Option<String>,
    /// Opaque session identifier; a fresh one is issued when absent
    pub session: Option<String>,
}

/// Weather conditions summarized for the response payload
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h, one decimal)
    pub wind_speed_kmh: f64,
    /// Precipitation probability (%)
    pub precipitation_chance: f64,
    /// Provider that supplied the data
    pub provider: String,
    /// Data quality token of the source
    pub data_quality: String,
    /// Feels-like temperature (°C), when derivable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    /// Dew point (°C), when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<f64>,
    /// Solar irradiance (kW-hr/m²/day), when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_irradiance: Option<f64>,
    /// Human-readable condition, when derivable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Response payload of the comfort endpoint
#[derive(Debug, Serialize)]
pub struct ComfortResponse {
    /// Session identifier to present on subsequent requests
    pub session: String,
    /// The resolved location that was scored
    pub location: ResolvedLocation,
    /// Summarized weather conditions
    pub weather: WeatherSummary,
    /// The final blended comfort result
    pub comfort: ComfortResult,
    /// The pure formula score before blending
    pub formula_score: u8,
    /// The adaptive model's prediction before blending
    pub ml_predicted: u8,
}

/// Score the current weather at a location for the requesting user
///
/// # Errors
///
/// Fails with `ResourceNotFound` for unknown locations and
/// `ExternalServiceUnavailable` when no weather provider can supply data; no
/// result is ever fabricated from defaults.
pub async fn get_comfort(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ComfortQuery>,
) -> AppResult<Json<ComfortResponse>> {
    let session = query
        .session
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let user = state.database.get_or_create_user(&session).await?;

    let requested = query
        .location
        .or_else(|| user.location.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_owned());

    let resolved = state.weather.resolve(&requested).await?;
    state
        .database
        .update_user_location(user.id, &resolved.name)
        .await?;

    let current = state
        .weather
        .fetch_current(resolved.latitude, resolved.longitude)
        .await?;
    let observation = current.observation;

    // Formula score against the user's preference profile
    let formula = ComfortFormula::new(user.profile.clone());
    let formula_result = formula.score(&observation);

    // Log the features and shown score so feedback can attach to them later
    let features = WeatherFeatures {
        temperature: observation.temperature(),
        humidity: observation.relative_humidity(),
        wind_speed: observation.wind_speed(),
        precipitation: observation.precipitation_probability(),
    };
    state
        .database
        .log_weather(user.id, &resolved.name, &features, formula_result.overall_score)
        .await?;

    // Retrain from the complete feedback history, then predict
    state.adaptive.train(&resolved.name).await?;
    let predicted = state.adaptive.predict(&resolved.name, &features).await?;

    let blended = ScoreBlender::blend(&formula_result, predicted, current.provenance);

    info!(
        location = %resolved.name,
        formula_score = formula_result.overall_score,
        ml_predicted = predicted,
        final_score = blended.overall_score,
        provider = %current.provider,
        "comfort analysis complete"
    );

    Ok(Json(ComfortResponse {
        session,
        weather: WeatherSummary {
            temperature: features.temperature,
            humidity: features.humidity,
            wind_speed_kmh: (features.wind_speed * 3.6 * 10.0).round() / 10.0,
            precipitation_chance: features.precipitation,
            provider: current.provider,
            data_quality: current.provenance.data_quality().to_owned(),
            feels_like: current.feels_like,
            dew_point: current.dew_point,
            solar_irradiance: current.solar_irradiance,
            condition: current.condition.map(|c| c.description().to_owned()),
        },
        location: resolved,
        comfort: blended,
        formula_score: formula_result.overall_score,
        ml_predicted: predicted,
    }))
}
