// ABOUTME: End-to-end tests of the scoring pipeline against real SQLite storage
// ABOUTME: formula score, weather logging, feedback, retrain, predict, and blend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{default_profile, observation, test_database};
use std::sync::Arc;
use vayu_server::comfort::{AdaptiveModel, ComfortFormula, ScoreBlender, UNTRAINED_SCORE};
use vayu_server::models::{FeedbackLabel, Provenance, WeatherFeatures};

#[tokio::test]
async fn test_full_scoring_and_learning_loop() {
    let (db, _dir) = test_database().await;
    let db = Arc::new(db);
    let adaptive = AdaptiveModel::new(db.clone(), db.clone());

    let user = db.get_or_create_user("session-a").await.unwrap();
    let obs = observation(22.0, 50.0, 3.0, 10.0);

    // Formula pass
    let formula = ComfortFormula::new(user.profile.clone());
    let formula_result = formula.score(&obs);
    assert_eq!(formula_result.overall_score, 99);

    // Log the shown score, then submit feedback on it
    let features = WeatherFeatures {
        temperature: 22.0,
        humidity: 50.0,
        wind_speed: 3.0,
        precipitation: 10.0,
    };
    db.log_weather(user.id, "Pune", &features, formula_result.overall_score)
        .await
        .unwrap();
    db.attach_feedback(user.id, FeedbackLabel::Accurate)
        .await
        .unwrap();

    // Retrain from the single feedback-bearing record: the model recalls it
    adaptive.train("Pune").await.unwrap();
    let predicted = adaptive.predict("Pune", &features).await.unwrap();
    assert_eq!(predicted, 99);

    // Blend: both inputs agree, so the final score is unchanged and the
    // blended table re-classifies it
    let blended = ScoreBlender::blend(&formula_result, predicted, Provenance::SatelliteDerived);
    assert_eq!(blended.overall_score, 99);
    assert_eq!(blended.comfort_level, "Excellent Conditions");
    assert!(blended.satellite_derived);

    // The prediction side effect landed in the log
    let predictions = db.recent_predictions("Pune", 10).await.unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].predicted_score, 99);
}

#[tokio::test]
async fn test_unrated_locations_predict_the_midpoint() {
    let (db, _dir) = test_database().await;
    let db = Arc::new(db);
    let adaptive = AdaptiveModel::new(db.clone(), db.clone());

    // Logged weather without feedback is not training-eligible
    let user = db.get_or_create_user("session-a").await.unwrap();
    let features = WeatherFeatures {
        temperature: 22.0,
        humidity: 50.0,
        wind_speed: 3.0,
        precipitation: 10.0,
    };
    db.log_weather(user.id, "Oslo", &features, 80).await.unwrap();

    adaptive.train("Oslo").await.unwrap();
    let predicted = adaptive.predict("Oslo", &features).await.unwrap();
    assert_eq!(predicted, UNTRAINED_SCORE);
}

#[tokio::test]
async fn test_model_survives_a_process_restart() {
    let (db, _dir) = test_database().await;
    let db = Arc::new(db);

    let user = db.get_or_create_user("session-a").await.unwrap();
    let features = WeatherFeatures {
        temperature: 28.0,
        humidity: 65.0,
        wind_speed: 4.0,
        precipitation: 30.0,
    };
    db.log_weather(user.id, "Pune", &features, 72).await.unwrap();
    db.attach_feedback(user.id, FeedbackLabel::Good).await.unwrap();

    // First process trains and persists into SQLite
    {
        let adaptive = AdaptiveModel::new(db.clone(), db.clone());
        adaptive.train("Pune").await.unwrap();
    }

    // A fresh registry over the same database reloads the artifact lazily
    let adaptive = AdaptiveModel::new(db.clone(), db.clone());
    let predicted = adaptive.predict("Pune", &features).await.unwrap();
    assert_eq!(predicted, 72);
}

#[tokio::test]
async fn test_blending_shifts_toward_the_model_by_provenance() {
    let (db, _dir) = test_database().await;
    let db = Arc::new(db);
    let adaptive = AdaptiveModel::new(db.clone(), db.clone());

    // Teach the model a score that disagrees with the formula
    let user = db.get_or_create_user("session-a").await.unwrap();
    let features = WeatherFeatures {
        temperature: 22.0,
        humidity: 50.0,
        wind_speed: 3.0,
        precipitation: 10.0,
    };
    db.log_weather(user.id, "Pune", &features, 59).await.unwrap();
    db.attach_feedback(user.id, FeedbackLabel::Bad).await.unwrap();
    adaptive.train("Pune").await.unwrap();

    let predicted = adaptive.predict("Pune", &features).await.unwrap();
    assert_eq!(predicted, 59);

    let formula_result = ComfortFormula::new(default_profile()).score(&observation(
        22.0, 50.0, 3.0, 10.0,
    ));
    assert_eq!(formula_result.overall_score, 99);

    // Satellite data trusts the model more: 0.4*59 + 0.6*99 = 83
    let satellite =
        ScoreBlender::blend(&formula_result, predicted, Provenance::SatelliteDerived);
    assert_eq!(satellite.overall_score, 83);

    // Fallback data trusts it less: 0.3*59 + 0.7*99 = 87
    let fallback =
        ScoreBlender::blend(&formula_result, predicted, Provenance::NumericalForecast);
    assert_eq!(fallback.overall_score, 87);
}
