// ABOUTME: Feedback and prediction log records used by the adaptive model
// ABOUTME: Defines WeatherFeatures, FeedbackLabel, FeedbackRecord, and PredictionRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The 4-dimensional feature vector used at observation time
///
/// These are the exact values the regression model trains on and predicts
/// from: raw observation values, not sub-scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherFeatures {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Precipitation probability (%)
    pub precipitation: f64,
}

impl WeatherFeatures {
    /// Feature vector in training column order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.precipitation,
        ]
    }
}

/// A user's qualitative reaction to a shown comfort score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackLabel {
    /// The conditions felt better than the score suggested
    Good,
    /// The conditions felt worse than the score suggested
    Bad,
    /// The score matched how the conditions felt
    Accurate,
}

impl FeedbackLabel {
    /// Canonical string form (matches the serialized representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Accurate => "accurate",
        }
    }
}

impl FromStr for FeedbackLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            "accurate" => Ok(Self::Accurate),
            other => Err(AppError::invalid_input(format!(
                "Unknown feedback label: '{other}'. Valid options: good, bad, accurate"
            ))),
        }
    }
}

impl fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged (weather features, shown score, user feedback) tuple
///
/// Only records with a non-null `user_feedback` are training-eligible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Database record ID
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Location key the record belongs to
    pub location: String,
    /// Feature values captured at observation time
    pub features: WeatherFeatures,
    /// The comfort score shown to the user
    pub comfort_score: u8,
    /// The user's qualitative reaction, if any
    pub user_feedback: Option<FeedbackLabel>,
    /// When the weather was observed and scored
    pub recorded_at: DateTime<Utc>,
    /// When the feedback was submitted, if any
    pub feedback_at: Option<DateTime<Utc>>,
}

/// A logged model prediction, stored for later performance analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Location key the prediction was made for
    pub location: String,
    /// Feature values the prediction was computed from
    pub features: WeatherFeatures,
    /// The predicted comfort score
    pub predicted_score: u8,
    /// Confidence placeholder (reserved for R²/error metrics)
    pub confidence: f64,
    /// When the prediction was made
    pub predicted_at: DateTime<Utc>,
}
