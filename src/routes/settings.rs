// ABOUTME: Comfort settings endpoints for reading and updating a user's profile
// ABOUTME: Validates categorical fields fail-fast before anything is persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vayu_core::errors::AppResult;
use vayu_core::models::{ComfortProfile, User};

/// Query parameters identifying the session
#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    /// Session identifier issued by the comfort endpoint
    pub session: String,
}

/// Request payload for a settings update
#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    /// Comfortable temperature band lower bound (°C)
    pub temp_min: i32,
    /// Comfortable temperature band upper bound (°C)
    pub temp_max: i32,
    /// Humidity tolerance: low, medium, or high
    pub humidity_tolerance: String,
    /// Wind tolerance: low, medium, or high
    pub wind_tolerance: String,
    /// Rain preference: dislike, neutral, or like
    pub rain_preference: String,
    /// Activity level: low, medium, or high
    pub activity_level: String,
}

/// Response payload carrying the user's current state
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// The user with their current profile
    pub user: User,
}

/// Read the session's current comfort settings
///
/// # Errors
///
/// Fails only on database errors; an unknown session gets a fresh user.
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SettingsQuery>,
) -> AppResult<Json<SettingsResponse>> {
    let user = state.database.get_or_create_user(&query.session).await?;
    Ok(Json(SettingsResponse { user }))
}

/// Update the session's comfort settings
///
/// Categorical fields are validated before anything is written; an unknown
/// value is a hard `InvalidProfile` error.
///
/// # Errors
///
/// Fails with `InvalidProfile` for unrecognized categorical values or an
/// inverted temperature band, and with database errors on write failure.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SettingsQuery>,
    Json(request): Json<SettingsRequest>,
) -> AppResult<Json<SettingsResponse>> {
    let profile = ComfortProfile::from_parts(
        request.temp_min,
        request.temp_max,
        &request.humidity_tolerance,
        &request.wind_tolerance,
        &request.rain_preference,
        &request.activity_level,
    )?;

    let mut user = state.database.get_or_create_user(&query.session).await?;
    state
        .database
        .update_user_settings(user.id, &profile)
        .await?;

    user.profile = profile;
    user.settings_completed = true;
    Ok(Json(SettingsResponse { user }))
}
