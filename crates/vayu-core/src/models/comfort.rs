// ABOUTME: Comfort scoring result types returned by the scoring pipeline
// ABOUTME: Defines ComfortResult with classification, per-dimension breakdown, and advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use serde::{Deserialize, Serialize};

/// Per-dimension comfort sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComfortBreakdown {
    /// Temperature sub-score
    pub temperature: u8,
    /// Humidity sub-score
    pub humidity: u8,
    /// Wind sub-score
    pub wind: u8,
    /// Precipitation sub-score
    pub precipitation: u8,
}

/// The scored, classified output of the comfort pipeline
///
/// Ephemeral: computed per request and returned to the caller; persistence of
/// the underlying features and score is the database layer's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComfortResult {
    /// Overall comfort score, 0-100
    pub overall_score: u8,
    /// Classification label for the score
    pub comfort_level: String,
    /// Severity color token associated with the classification
    pub comfort_color: String,
    /// Per-dimension sub-scores
    pub breakdown: ComfortBreakdown,
    /// Ordered advisory strings; never empty
    pub recommendations: Vec<String>,
    /// Data quality token of the source observation, set after blending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_quality: Option<String>,
    /// Whether the source observation was satellite-derived, set after blending
    #[serde(default)]
    pub satellite_derived: bool,
}
