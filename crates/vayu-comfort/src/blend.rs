// ABOUTME: Provenance-weighted blending of the formula score with the model prediction
// ABOUTME: Applies the mixing weight and the coarser blended classification table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Score Blender
//!
//! Combines the comfort formula's score with the adaptive model's prediction
//! using a mixing weight chosen by the observation's data-source quality.
//! Satellite-derived observations give the learned model more trust than
//! fallback numerical forecasts.
//!
//! The blended score is re-classified with its own, coarser threshold table.
//! That table intentionally differs from the standalone formula
//! classification in [`crate::formula::classify_formula`]; the two must not
//! be unified.

use vayu_core::models::{ComfortResult, Provenance};

/// Mixing weight applied to the model prediction for satellite-derived data
const BETA_SATELLITE: f64 = 0.4;

/// Mixing weight applied to the model prediction for fallback data
const BETA_FALLBACK: f64 = 0.3;

/// The mixing weight β for the given provenance
///
/// This is a provenance-conditioned trust weighting, not a function of model
/// confidence.
#[must_use]
pub const fn mixing_weight(provenance: Provenance) -> f64 {
    match provenance {
        Provenance::SatelliteDerived => BETA_SATELLITE,
        Provenance::NumericalForecast => BETA_FALLBACK,
    }
}

/// Classify a blended score into a label and color token
#[must_use]
pub const fn classify_blended(score: u8) -> (&'static str, &'static str) {
    if score >= 85 {
        ("Excellent Conditions", "green")
    } else if score >= 70 {
        ("Very Comfortable", "lightgreen")
    } else if score >= 55 {
        ("Comfortable", "orange")
    } else if score >= 35 {
        ("Uncomfortable", "red")
    } else {
        ("Poor Conditions", "darkred")
    }
}

/// Blends formula and model scores into the final published result
pub struct ScoreBlender;

impl ScoreBlender {
    /// Produce the final `ComfortResult`
    ///
    /// `final_score = round(β * predicted + (1 - β) * formula)`. Breakdown
    /// and recommendations are inherited unchanged from the formula result;
    /// only the overall score, classification, and provenance flags are
    /// overwritten.
    #[must_use]
    pub fn blend(
        formula_result: &ComfortResult,
        predicted_score: u8,
        provenance: Provenance,
    ) -> ComfortResult {
        let beta = mixing_weight(provenance);
        let final_score = beta
            .mul_add(
                f64::from(predicted_score),
                (1.0 - beta) * f64::from(formula_result.overall_score),
            )
            .round()
            .clamp(0.0, 100.0) as u8;

        let (comfort_level, comfort_color) = classify_blended(final_score);

        ComfortResult {
            overall_score: final_score,
            comfort_level: comfort_level.to_owned(),
            comfort_color: comfort_color.to_owned(),
            breakdown: formula_result.breakdown,
            recommendations: formula_result.recommendations.clone(),
            data_quality: Some(provenance.data_quality().to_owned()),
            satellite_derived: provenance.is_satellite(),
        }
    }
}
