// ABOUTME: Service status endpoint reporting version and provider inventory
// ABOUTME: Lists the weather provider chain with roles and descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::AppState;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use vayu_core::constants::service;
use vayu_providers::ProviderStatus;

/// Response payload of the status endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Current server time
    pub timestamp: DateTime<Utc>,
    /// Weather provider chain, primary first
    pub providers: Vec<ProviderStatus>,
}

/// Report service identity and the configured provider chain
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: service::SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        timestamp: Utc::now(),
        providers: state.weather.provider_inventory(),
    })
}
