// ABOUTME: Weather log storage and user feedback capture for adaptive learning
// ABOUTME: Implements the comfort engine's FeedbackStore query over weather_logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::Database;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::warn;
use uuid::Uuid;
use vayu_comfort::FeedbackStore;
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::{FeedbackLabel, FeedbackRecord, WeatherFeatures};

impl Database {
    /// Append a weather log row for a scored request; feedback starts null
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn log_weather(
        &self,
        user_id: Uuid,
        location: &str,
        features: &WeatherFeatures,
        comfort_score: u8,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO weather_logs (
                user_id, location, temperature, humidity, wind_speed,
                precipitation, comfort_score, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user_id.to_string())
        .bind(location)
        .bind(features.temperature)
        .bind(features.humidity)
        .bind(features.wind_speed)
        .bind(features.precipitation)
        .bind(i64::from(comfort_score))
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to log weather: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Attach a feedback label to the user's most recent weather log
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` when the user has no logged
    /// weather yet, or a database error if the write fails.
    pub async fn attach_feedback(&self, user_id: Uuid, label: FeedbackLabel) -> AppResult<()> {
        let recent = sqlx::query(
            r"
            SELECT id FROM weather_logs
            WHERE user_id = $1
            ORDER BY recorded_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to find recent weather log: {e}")))?;

        let Some(row) = recent else {
            return Err(AppError::not_found("recent weather log for this session"));
        };
        let log_id: i64 = row.get("id");

        sqlx::query("UPDATE weather_logs SET user_feedback = $1, feedback_at = $2 WHERE id = $3")
            .bind(label.as_str())
            .bind(Utc::now())
            .bind(log_id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to save feedback: {e}")))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedbackStore for Database {
    async fn eligible_records(&self, location: &str) -> AppResult<Vec<FeedbackRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, location, temperature, humidity, wind_speed,
                   precipitation, comfort_score, user_feedback, recorded_at, feedback_at
            FROM weather_logs
            WHERE location = $1 AND user_feedback IS NOT NULL
            ",
        )
        .bind(location)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to query feedback records: {e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");

            let user_id: String = row.get("user_id");
            let Ok(user_id) = Uuid::parse_str(&user_id) else {
                warn!(log_id = id, "skipping weather log with corrupt user id");
                continue;
            };

            let label: String = row.get("user_feedback");
            let Ok(user_feedback) = label.parse::<FeedbackLabel>() else {
                warn!(log_id = id, label = %label, "skipping weather log with unknown feedback label");
                continue;
            };

            records.push(FeedbackRecord {
                id,
                user_id,
                location: row.get("location"),
                features: WeatherFeatures {
                    temperature: row.get("temperature"),
                    humidity: row.get("humidity"),
                    wind_speed: row.get("wind_speed"),
                    precipitation: row.get("precipitation"),
                },
                comfort_score: row.get::<i64, _>("comfort_score").clamp(0, 100) as u8,
                user_feedback: Some(user_feedback),
                recorded_at: row.get::<DateTime<Utc>, _>("recorded_at"),
                feedback_at: row.get::<Option<DateTime<Utc>>, _>("feedback_at"),
            });
        }

        Ok(records)
    }
}
