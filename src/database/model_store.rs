// ABOUTME: Persisted per-location model artifacts and the prediction log
// ABOUTME: Implements the comfort engine's ModelStore over SQLite blob rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::Database;
use chrono::{DateTime, Utc};
use sqlx::Row;
use vayu_comfort::{ModelState, ModelStore};
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::{PredictionRecord, WeatherFeatures};

#[async_trait::async_trait]
impl ModelStore for Database {
    async fn save_model(&self, location: &str, state: &ModelState) -> AppResult<()> {
        let blob = serde_json::to_string(state)
            .map_err(|e| AppError::serialization(format!("Failed to encode model state: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO comfort_models (location, state, trained_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(location) DO UPDATE SET
                state = excluded.state,
                trained_at = excluded.trained_at
            ",
        )
        .bind(location)
        .bind(blob)
        .bind(state.trained_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::storage(format!("Failed to persist model artifact: {e}")))?;

        Ok(())
    }

    async fn load_model(&self, location: &str) -> AppResult<Option<ModelState>> {
        let row = sqlx::query("SELECT state FROM comfort_models WHERE location = $1")
            .bind(location)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::storage(format!("Failed to load model artifact: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let blob: String = row.get("state");
        let state = serde_json::from_str(&blob)
            .map_err(|e| AppError::serialization(format!("Failed to decode model state: {e}")))?;
        Ok(Some(state))
    }

    async fn record_prediction(&self, prediction: &PredictionRecord) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO ml_predictions (
                location, temperature, humidity, wind_speed, precipitation,
                predicted_score, confidence, predicted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&prediction.location)
        .bind(prediction.features.temperature)
        .bind(prediction.features.humidity)
        .bind(prediction.features.wind_speed)
        .bind(prediction.features.precipitation)
        .bind(i64::from(prediction.predicted_score))
        .bind(prediction.confidence)
        .bind(prediction.predicted_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::storage(format!("Failed to append prediction log: {e}")))?;

        Ok(())
    }
}

impl Database {
    /// Most recent prediction log entries for a location, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn recent_predictions(
        &self,
        location: &str,
        limit: u32,
    ) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query(
            r"
            SELECT location, temperature, humidity, wind_speed, precipitation,
                   predicted_score, confidence, predicted_at
            FROM ml_predictions
            WHERE location = $1
            ORDER BY predicted_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(location)
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to query predictions: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| PredictionRecord {
                location: row.get("location"),
                features: WeatherFeatures {
                    temperature: row.get("temperature"),
                    humidity: row.get("humidity"),
                    wind_speed: row.get("wind_speed"),
                    precipitation: row.get("precipitation"),
                },
                predicted_score: row.get::<i64, _>("predicted_score").clamp(0, 100) as u8,
                confidence: row.get("confidence"),
                predicted_at: row.get::<DateTime<Utc>, _>("predicted_at"),
            })
            .collect())
    }
}
