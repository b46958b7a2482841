// ABOUTME: HTTP route assembly and shared application state for the VAYU server
// ABOUTME: Wires comfort, feedback, settings, and status handlers into one Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! HTTP routes for the VAYU comfort API

/// Comfort scoring pipeline endpoint
pub mod comfort;
/// Feedback capture endpoint
pub mod feedback;
/// Comfort settings endpoints
pub mod settings;
/// Service status endpoint
pub mod status;

use crate::database::Database;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vayu_comfort::AdaptiveModel;
use vayu_providers::WeatherService;

/// Shared state injected into every request handler
pub struct AppState {
    /// SQLite persistence
    pub database: Arc<Database>,
    /// Geocoding and the weather provider chain
    pub weather: Arc<WeatherService>,
    /// Per-location adaptive comfort models
    pub adaptive: Arc<AdaptiveModel>,
}

/// Assemble the full application router
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/comfort", get(comfort::get_comfort))
        .route("/api/feedback", post(feedback::submit_feedback))
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/status", get(status::get_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
