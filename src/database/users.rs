// ABOUTME: User storage operations keyed by opaque session identifiers
// ABOUTME: Implicit user creation, location tracking, and settings updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use super::Database;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;
use uuid::Uuid;
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::{ComfortProfile, User};

/// Map a database row onto a `User`, validating the stored profile
fn user_from_row(row: &SqliteRow) -> AppResult<User> {
    let id: String = row.get("id");
    let id = Uuid::parse_str(&id)
        .map_err(|e| AppError::database(format!("Corrupt user id '{id}': {e}")))?;

    let profile = ComfortProfile::from_parts(
        row.get("temp_min"),
        row.get("temp_max"),
        row.get::<String, _>("humidity_tolerance").as_str(),
        row.get::<String, _>("wind_tolerance").as_str(),
        row.get::<String, _>("rain_preference").as_str(),
        row.get::<String, _>("activity_level").as_str(),
    )?;

    Ok(User {
        id,
        session_id: row.get("session_id"),
        location: row.get("location"),
        profile,
        settings_completed: row.get("settings_completed"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        last_active: row.get::<DateTime<Utc>, _>("last_active"),
    })
}

impl Database {
    /// Fetch the user for a session, creating one with the default profile
    /// on first sight; bumps `last_active` either way
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_or_create_user(&self, session_id: &str) -> AppResult<User> {
        let existing = sqlx::query("SELECT * FROM users WHERE session_id = $1")
            .bind(session_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?;

        let now = Utc::now();
        if let Some(row) = existing {
            let mut user = user_from_row(&row)?;
            sqlx::query("UPDATE users SET last_active = $1 WHERE id = $2")
                .bind(now)
                .bind(user.id.to_string())
                .execute(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to update last_active: {e}")))?;
            user.last_active = now;
            return Ok(user);
        }

        let user = User::new(session_id);
        sqlx::query(
            r"
            INSERT INTO users (
                id, session_id, location, temp_min, temp_max,
                humidity_tolerance, wind_tolerance, rain_preference, activity_level,
                settings_completed, created_at, last_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.session_id)
        .bind(&user.location)
        .bind(user.profile.temp_min)
        .bind(user.profile.temp_max)
        .bind(user.profile.humidity_tolerance.as_str())
        .bind(user.profile.wind_tolerance.as_str())
        .bind(user.profile.rain_preference.as_str())
        .bind(user.profile.activity_level.as_str())
        .bind(user.settings_completed)
        .bind(user.created_at)
        .bind(user.last_active)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        info!(user_id = %user.id, "created new user with default comfort profile");
        Ok(user)
    }

    /// Remember the user's last requested location
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_user_location(&self, user_id: Uuid, location: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET location = $1 WHERE id = $2")
            .bind(location)
            .bind(user_id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to update location: {e}")))?;
        Ok(())
    }

    /// Persist an explicit settings update and mark the settings flow done
    ///
    /// The profile has already been validated at construction; this only
    /// writes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the write fails.
    pub async fn update_user_settings(
        &self,
        user_id: Uuid,
        profile: &ComfortProfile,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET
                temp_min = $1, temp_max = $2,
                humidity_tolerance = $3, wind_tolerance = $4,
                rain_preference = $5, activity_level = $6,
                settings_completed = 1
            WHERE id = $7
            ",
        )
        .bind(profile.temp_min)
        .bind(profile.temp_max)
        .bind(profile.humidity_tolerance.as_str())
        .bind(profile.wind_tolerance.as_str())
        .bind(profile.rain_preference.as_str())
        .bind(profile.activity_level.as_str())
        .bind(user_id.to_string())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to save settings: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("user {user_id}")));
        }

        info!(user_id = %user_id, "comfort settings saved");
        Ok(())
    }
}
