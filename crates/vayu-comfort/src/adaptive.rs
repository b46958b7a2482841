// ABOUTME: Per-location adaptive model registry with retrain-and-predict cycle
// ABOUTME: Serializes train/persist/predict per location and degrades gracefully on I/O failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Adaptive Model
//!
//! Owns one regression model per location, retrained from the complete
//! feedback history on every `train` call and persisted through an injected
//! blob store. Each location key gets its own async lock so that concurrent
//! train and predict calls against the same artifact never interleave a
//! write with a read.
//!
//! Storage failures degrade rather than fail the caller's request: a persist
//! failure leaves the in-memory model authoritative for the rest of the
//! process, and a load failure falls back to whatever is already in memory.

use crate::regression::{LinearModel, ModelState};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use vayu_core::errors::AppResult;
use vayu_core::models::{FeedbackRecord, PredictionRecord, WeatherFeatures};

/// Deterministic zero-state prediction: the scale midpoint, returned before
/// any model has been trained for a location
pub const UNTRAINED_SCORE: u8 = 50;

/// Query interface over historical feedback records
#[async_trait::async_trait]
pub trait FeedbackStore: Send + Sync {
    /// All records for `location` that carry non-null user feedback
    async fn eligible_records(&self, location: &str) -> AppResult<Vec<FeedbackRecord>>;
}

/// Durable storage for per-location model artifacts and the prediction log
#[async_trait::async_trait]
pub trait ModelStore: Send + Sync {
    /// Persist the fitted parameters for `location`
    async fn save_model(&self, location: &str, state: &ModelState) -> AppResult<()>;

    /// Load the persisted parameters for `location`, if any
    async fn load_model(&self, location: &str) -> AppResult<Option<ModelState>>;

    /// Append a prediction to the prediction log
    async fn record_prediction(&self, prediction: &PredictionRecord) -> AppResult<()>;
}

/// Per-location adaptive comfort model
///
/// Each location's feedback and model are logically independent partitions;
/// there is no cross-location sharing.
pub struct AdaptiveModel {
    feedback: Arc<dyn FeedbackStore>,
    store: Arc<dyn ModelStore>,
    models: DashMap<String, Arc<Mutex<Option<LinearModel>>>>,
}

impl AdaptiveModel {
    /// Create a registry over the given storage collaborators
    #[must_use]
    pub fn new(feedback: Arc<dyn FeedbackStore>, store: Arc<dyn ModelStore>) -> Self {
        Self {
            feedback,
            store,
            models: DashMap::new(),
        }
    }

    /// The lock slot for a location, created untrained on first use
    fn slot(&self, location: &str) -> Arc<Mutex<Option<LinearModel>>> {
        self.models
            .entry(location.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }

    /// Retrain the location's model from its complete eligible history
    ///
    /// Zero eligible records is not an error: the call is a no-op that
    /// leaves any previously trained model untouched. A successful fit is
    /// persisted; persist failure is surfaced as a warning only.
    ///
    /// # Errors
    ///
    /// Returns an error if the feedback query fails or fitting fails.
    pub async fn train(&self, location: &str) -> AppResult<()> {
        let slot = self.slot(location);
        let mut guard = slot.lock().await;

        let records = self.feedback.eligible_records(location).await?;
        if records.is_empty() {
            debug!(location = %location, "no feedback-bearing records, skipping retrain");
            return Ok(());
        }

        let rows: Vec<[f64; 4]> = records.iter().map(|r| r.features.as_array()).collect();
        let targets: Vec<f64> = records
            .iter()
            .map(|r| f64::from(r.comfort_score))
            .collect();

        let model = LinearModel::fit(&rows, &targets)?;
        let state = ModelState::from_model(&model, Utc::now());

        if let Err(e) = self.store.save_model(location, &state).await {
            warn!(
                location = %location,
                error = %e,
                "model persist failed, in-memory model remains authoritative"
            );
        }

        debug!(
            location = %location,
            samples = model.sample_count(),
            "comfort model retrained"
        );
        *guard = Some(model);
        Ok(())
    }

    /// Predict a comfort score for the given features
    ///
    /// Reloads the persisted artifact first so a model trained in another
    /// process (or a prior run) is picked up. Returns the deterministic
    /// midpoint when no trained model exists anywhere. The prediction is
    /// appended to the prediction log as a side effect; log failures are
    /// surfaced as warnings only.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the `AppResult` return keeps the
    /// contract open for stores that must fail hard.
    pub async fn predict(&self, location: &str, features: &WeatherFeatures) -> AppResult<u8> {
        let slot = self.slot(location);
        let mut guard = slot.lock().await;

        match self.store.load_model(location).await {
            Ok(Some(state)) => {
                if let Some(model) = state.to_model() {
                    *guard = Some(model);
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    location = %location,
                    error = %e,
                    "model reload failed, falling back to in-memory state"
                );
            }
        }

        let score = guard.as_ref().map_or(UNTRAINED_SCORE, |model| {
            model.predict(&features.as_array()).round().clamp(0.0, 100.0) as u8
        });

        let prediction = PredictionRecord {
            location: location.to_owned(),
            features: *features,
            predicted_score: score,
            confidence: 0.0,
            predicted_at: Utc::now(),
        };
        if let Err(e) = self.store.record_prediction(&prediction).await {
            warn!(location = %location, error = %e, "failed to append prediction log entry");
        }

        Ok(score)
    }
}
