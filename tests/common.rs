// ABOUTME: Shared helpers for VAYU integration tests
// ABOUTME: Temp-file backed databases, profile builders, and observation builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

use tempfile::TempDir;
use vayu_server::database::Database;
use vayu_server::models::{
    ActivityLevel, ComfortProfile, RainPreference, ToleranceLevel, WeatherObservation,
};

/// Create a fresh migrated database backed by a temp directory.
///
/// The `TempDir` must be kept alive for the database's lifetime.
pub async fn test_database() -> (Database, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let url = format!("sqlite:{}/vayu-test.db", dir.path().display());
    let database = Database::new(&url).await.expect("test database");
    (database, dir)
}

/// The default medium-everything profile (18-26 °C band)
pub fn default_profile() -> ComfortProfile {
    ComfortProfile::default()
}

/// A profile with every field chosen explicitly
pub fn profile(
    temp_min: i32,
    temp_max: i32,
    humidity: ToleranceLevel,
    wind: ToleranceLevel,
    rain: RainPreference,
    activity: ActivityLevel,
) -> ComfortProfile {
    ComfortProfile {
        temp_min,
        temp_max,
        humidity_tolerance: humidity,
        wind_tolerance: wind,
        rain_preference: rain,
        activity_level: activity,
    }
}

/// A fully populated observation
pub fn observation(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    precipitation: f64,
) -> WeatherObservation {
    WeatherObservation::new(temperature, humidity, wind_speed, precipitation)
}
