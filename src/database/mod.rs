// ABOUTME: SQLite database manager for users, weather logs, predictions, and models
// ABOUTME: Owns the connection pool and runs idempotent migrations at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Database Management
//!
//! SQLite persistence for the VAYU server: session-keyed users with their
//! comfort profiles, the weather/feedback log the adaptive model trains on,
//! the prediction log, and the persisted per-location model artifacts.

/// Weather log and feedback operations
mod feedback;
/// Model artifact and prediction log storage
mod model_store;
/// User storage and settings updates
mod users;

use sqlx::SqlitePool;
use vayu_core::errors::{AppError, AppResult};

/// Database manager for VAYU server storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns `AppError::DatabaseError` if the connection or a migration
    /// fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains("mode=") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Run idempotent schema migrations
    ///
    /// # Errors
    ///
    /// Returns `AppError::DatabaseError` if a statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                session_id TEXT UNIQUE NOT NULL,
                location TEXT,
                temp_min INTEGER NOT NULL DEFAULT 18,
                temp_max INTEGER NOT NULL DEFAULT 26,
                humidity_tolerance TEXT NOT NULL DEFAULT 'medium',
                wind_tolerance TEXT NOT NULL DEFAULT 'medium',
                rain_preference TEXT NOT NULL DEFAULT 'neutral',
                activity_level TEXT NOT NULL DEFAULT 'medium',
                settings_completed BOOLEAN NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create users table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_session ON users(session_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create users index: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weather_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                location TEXT NOT NULL,
                temperature REAL NOT NULL,
                humidity REAL NOT NULL,
                wind_speed REAL NOT NULL,
                precipitation REAL NOT NULL,
                comfort_score INTEGER NOT NULL,
                user_feedback TEXT,
                recorded_at TEXT NOT NULL,
                feedback_at TEXT,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create weather_logs table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weather_logs_user ON weather_logs(user_id, recorded_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create weather_logs index: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weather_logs_location ON weather_logs(location)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create weather_logs index: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ml_predictions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                location TEXT NOT NULL,
                temperature REAL NOT NULL,
                humidity REAL NOT NULL,
                wind_speed REAL NOT NULL,
                precipitation REAL NOT NULL,
                predicted_score INTEGER NOT NULL,
                confidence REAL NOT NULL,
                predicted_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create ml_predictions table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_ml_predictions_location ON ml_predictions(location)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create ml_predictions index: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS comfort_models (
                location TEXT PRIMARY KEY,
                state TEXT NOT NULL,
                trained_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create comfort_models table: {e}")))?;

        Ok(())
    }

    /// The underlying connection pool
    pub(crate) const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
