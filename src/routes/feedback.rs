// ABOUTME: Feedback capture endpoint feeding the adaptive learning loop
// ABOUTME: Attaches a qualitative label to the session's most recent weather log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::AppState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use vayu_core::errors::AppResult;
use vayu_core::models::FeedbackLabel;

/// Request payload for submitting feedback
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// Session identifier issued by the comfort endpoint
    pub session: String,
    /// Feedback label: good, bad, or accurate
    pub feedback: String,
}

/// Response payload after recording feedback
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// Always "success" on the happy path
    pub status: String,
    /// Human-readable confirmation
    pub message: String,
}

/// Attach feedback to the session's most recent weather log
///
/// # Errors
///
/// Fails with `InvalidInput` for unknown labels and `ResourceNotFound` when
/// the session has no logged weather to attach feedback to.
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> AppResult<Json<FeedbackResponse>> {
    let label: FeedbackLabel = request.feedback.parse()?;
    let user = state.database.get_or_create_user(&request.session).await?;

    state.database.attach_feedback(user.id, label).await?;
    info!(user_id = %user.id, label = %label, "feedback recorded");

    Ok(Json(FeedbackResponse {
        status: "success".to_owned(),
        message: "Thank you! VAYU is learning from your feedback.".to_owned(),
    }))
}
