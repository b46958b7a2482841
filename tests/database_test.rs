// ABOUTME: Integration tests for SQLite storage of users, weather logs, and models
// ABOUTME: Covers implicit user creation, settings, feedback capture, and artifact roundtrip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::test_database;
use vayu_server::comfort::{FeedbackStore, LinearModel, ModelState, ModelStore};
use vayu_server::models::{
    ActivityLevel, ComfortProfile, FeedbackLabel, PredictionRecord, RainPreference,
    ToleranceLevel, WeatherFeatures,
};

fn features(temperature: f64, humidity: f64, wind_speed: f64, precipitation: f64) -> WeatherFeatures {
    WeatherFeatures {
        temperature,
        humidity,
        wind_speed,
        precipitation,
    }
}

#[tokio::test]
async fn test_get_or_create_user_is_idempotent_per_session() {
    let (db, _dir) = test_database().await;

    let first = db.get_or_create_user("session-a").await.unwrap();
    let second = db.get_or_create_user("session-a").await.unwrap();
    assert_eq!(first.id, second.id);

    // A new user starts with the default profile and incomplete settings
    assert_eq!(first.profile, ComfortProfile::default());
    assert!(!first.settings_completed);

    let other = db.get_or_create_user("session-b").await.unwrap();
    assert_ne!(first.id, other.id);
}

#[tokio::test]
async fn test_settings_update_round_trips() {
    let (db, _dir) = test_database().await;
    let user = db.get_or_create_user("session-a").await.unwrap();

    let profile = ComfortProfile {
        temp_min: 15,
        temp_max: 22,
        humidity_tolerance: ToleranceLevel::Low,
        wind_tolerance: ToleranceLevel::High,
        rain_preference: RainPreference::Like,
        activity_level: ActivityLevel::High,
    };
    db.update_user_settings(user.id, &profile).await.unwrap();

    let reloaded = db.get_or_create_user("session-a").await.unwrap();
    assert_eq!(reloaded.profile, profile);
    assert!(reloaded.settings_completed);
}

#[tokio::test]
async fn test_settings_update_for_missing_user_is_not_found() {
    let (db, _dir) = test_database().await;
    let result = db
        .update_user_settings(uuid::Uuid::new_v4(), &ComfortProfile::default())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_feedback_attaches_to_the_most_recent_log() {
    let (db, _dir) = test_database().await;
    let user = db.get_or_create_user("session-a").await.unwrap();

    db.log_weather(user.id, "Pune", &features(30.0, 60.0, 2.0, 10.0), 70)
        .await
        .unwrap();
    db.log_weather(user.id, "Pune", &features(22.0, 50.0, 3.0, 10.0), 99)
        .await
        .unwrap();

    db.attach_feedback(user.id, FeedbackLabel::Accurate)
        .await
        .unwrap();

    // Only the second (most recent) log became training-eligible
    let eligible = db.eligible_records("Pune").await.unwrap();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].comfort_score, 99);
    assert!((eligible[0].features.temperature - 22.0).abs() < f64::EPSILON);
    assert_eq!(eligible[0].user_feedback, Some(FeedbackLabel::Accurate));
    assert!(eligible[0].feedback_at.is_some());
}

#[tokio::test]
async fn test_feedback_without_any_log_is_not_found() {
    let (db, _dir) = test_database().await;
    let user = db.get_or_create_user("session-a").await.unwrap();

    let result = db.attach_feedback(user.id, FeedbackLabel::Good).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_eligible_records_are_partitioned_by_location() {
    let (db, _dir) = test_database().await;
    let user = db.get_or_create_user("session-a").await.unwrap();

    db.log_weather(user.id, "Pune", &features(22.0, 50.0, 3.0, 10.0), 99)
        .await
        .unwrap();
    db.attach_feedback(user.id, FeedbackLabel::Good).await.unwrap();

    db.log_weather(user.id, "Oslo", &features(5.0, 70.0, 8.0, 40.0), 45)
        .await
        .unwrap();
    db.attach_feedback(user.id, FeedbackLabel::Bad).await.unwrap();

    let pune = db.eligible_records("Pune").await.unwrap();
    assert_eq!(pune.len(), 1);
    assert_eq!(pune[0].location, "Pune");

    let oslo = db.eligible_records("Oslo").await.unwrap();
    assert_eq!(oslo.len(), 1);
    assert_eq!(oslo[0].comfort_score, 45);

    assert!(db.eligible_records("Quito").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_model_artifact_round_trips_and_upserts() {
    let (db, _dir) = test_database().await;

    assert!(db.load_model("Pune").await.unwrap().is_none());

    let model = LinearModel::fit(&[[22.0, 50.0, 3.0, 10.0]], &[87.0]).unwrap();
    let state = ModelState::from_model(&model, Utc::now());
    db.save_model("Pune", &state).await.unwrap();

    let loaded = db.load_model("Pune").await.unwrap().unwrap();
    assert_eq!(loaded.to_model().unwrap(), model);

    // Saving again replaces the artifact rather than erroring
    let newer = LinearModel::fit(&[[10.0, 80.0, 6.0, 60.0]], &[40.0]).unwrap();
    let newer_state = ModelState::from_model(&newer, Utc::now());
    db.save_model("Pune", &newer_state).await.unwrap();

    let reloaded = db.load_model("Pune").await.unwrap().unwrap();
    assert_eq!(reloaded.to_model().unwrap(), newer);
}

#[tokio::test]
async fn test_prediction_log_append_and_query() {
    let (db, _dir) = test_database().await;

    db.record_prediction(&PredictionRecord {
        location: "Pune".to_owned(),
        features: features(22.0, 50.0, 3.0, 10.0),
        predicted_score: 87,
        confidence: 0.0,
        predicted_at: Utc::now(),
    })
    .await
    .unwrap();

    let recent = db.recent_predictions("Pune", 10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].predicted_score, 87);
    assert!(db.recent_predictions("Oslo", 10).await.unwrap().is_empty());
}
