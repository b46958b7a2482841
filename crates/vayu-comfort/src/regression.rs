// ABOUTME: Ordinary-least-squares linear regression over the 4-dimensional weather features
// ABOUTME: Normal-equations fit with Gaussian elimination and versioned serializable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Linear Regression Model
//!
//! A single linear model mapping the feature vector
//! `[temperature, humidity, wind_speed, precipitation]` to a scalar comfort
//! score. Fitting is ordinary least squares with an intercept: the normal
//! equations are assembled in one pass over the training rows and solved by
//! Gaussian elimination with partial pivoting.
//!
//! Rank-deficient systems are handled by forcing the unresolvable
//! coefficients to zero, so a single training row yields an intercept-only
//! model that recalls that row's target exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use vayu_core::errors::{AppError, AppResult};

/// Number of input features
pub const NUM_FEATURES: usize = 4;

/// Unknowns in the normal equations: the intercept plus one weight per feature
const NUM_UNKNOWNS: usize = NUM_FEATURES + 1;

/// Pivots below this magnitude are treated as zero (rank deficiency)
const PIVOT_EPSILON: f64 = 1e-9;

/// Serialization format version. Increment when the format changes
/// incompatibly so that old artifacts are gracefully discarded rather than
/// causing a deserialization error.
const STATE_VERSION: u32 = 1;

/// A fitted linear regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Per-feature weights
    weights: [f64; NUM_FEATURES],
    /// Intercept term
    intercept: f64,
    /// Number of training rows the model was fitted on
    sample_count: u32,
}

impl LinearModel {
    /// Fit a fresh model on the full training set
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `rows` is empty or `targets` has a
    /// different length.
    pub fn fit(rows: &[[f64; NUM_FEATURES]], targets: &[f64]) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::invalid_input(
                "Cannot fit a regression model on an empty training set",
            ));
        }
        if rows.len() != targets.len() {
            return Err(AppError::invalid_input(format!(
                "Training set size mismatch: {} feature rows vs {} targets",
                rows.len(),
                targets.len()
            )));
        }

        // Assemble the augmented normal equations (XᵀX | Xᵀy) in one pass.
        // The intercept occupies column 0 so that rank-deficient data still
        // resolves it: eliminating the intercept column centers the
        // remaining system, and unresolvable weights fall back to zero.
        let mut system = [[0.0_f64; NUM_UNKNOWNS + 1]; NUM_UNKNOWNS];
        for (row, &target) in rows.iter().zip(targets) {
            let x = [1.0, row[0], row[1], row[2], row[3]];
            for i in 0..NUM_UNKNOWNS {
                for j in 0..NUM_UNKNOWNS {
                    system[i][j] += x[i] * x[j];
                }
                system[i][NUM_UNKNOWNS] += x[i] * target;
            }
        }

        let solution = solve(system);
        Ok(Self {
            weights: [solution[1], solution[2], solution[3], solution[4]],
            intercept: solution[0],
            sample_count: rows.len() as u32,
        })
    }

    /// Predict a comfort score from a feature vector (unrounded, unclamped)
    #[must_use]
    pub fn predict(&self, features: &[f64; NUM_FEATURES]) -> f64 {
        let mut sum = self.intercept;
        for (weight, feature) in self.weights.iter().zip(features) {
            sum += weight * feature;
        }
        sum
    }

    /// Number of training rows the model was fitted on
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

/// Solve the augmented system by Gaussian elimination with partial pivoting.
/// Near-zero pivots mark rank-deficient columns; their unknowns are forced
/// to zero during back-substitution.
fn solve(mut system: [[f64; NUM_UNKNOWNS + 1]; NUM_UNKNOWNS]) -> [f64; NUM_UNKNOWNS] {
    for col in 0..NUM_UNKNOWNS {
        let mut pivot_row = col;
        for row in (col + 1)..NUM_UNKNOWNS {
            if system[row][col].abs() > system[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if system[pivot_row][col].abs() < PIVOT_EPSILON {
            continue;
        }
        system.swap(col, pivot_row);

        for row in (col + 1)..NUM_UNKNOWNS {
            let factor = system[row][col] / system[col][col];
            for c in col..=NUM_UNKNOWNS {
                system[row][c] -= factor * system[col][c];
            }
        }
    }

    let mut solution = [0.0_f64; NUM_UNKNOWNS];
    for i in (0..NUM_UNKNOWNS).rev() {
        if system[i][i].abs() < PIVOT_EPSILON {
            solution[i] = 0.0;
            continue;
        }
        let mut sum = system[i][NUM_UNKNOWNS];
        for j in (i + 1)..NUM_UNKNOWNS {
            sum -= system[i][j] * solution[j];
        }
        solution[i] = sum / system[i][i];
    }
    solution
}

/// Serializable state of a fitted model, persisted per location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    /// Format version -- used to discard incompatible saved states
    pub version: u32,
    /// Per-feature weights
    pub weights: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
    /// Number of training rows the model was fitted on
    pub sample_count: u32,
    /// When the model was trained
    pub trained_at: DateTime<Utc>,
}

impl ModelState {
    /// Capture the state of a fitted model
    #[must_use]
    pub fn from_model(model: &LinearModel, trained_at: DateTime<Utc>) -> Self {
        Self {
            version: STATE_VERSION,
            weights: model.weights.to_vec(),
            intercept: model.intercept,
            sample_count: model.sample_count,
            trained_at,
        }
    }

    /// Reconstruct a model, discarding invalid or incompatible states
    #[must_use]
    pub fn to_model(&self) -> Option<LinearModel> {
        if self.version != STATE_VERSION {
            warn!(
                got = self.version,
                want = STATE_VERSION,
                "model state version mismatch, discarding persisted artifact"
            );
            return None;
        }
        if self.weights.len() != NUM_FEATURES {
            warn!(
                expected = NUM_FEATURES,
                got = self.weights.len(),
                "invalid model weight count, discarding persisted artifact"
            );
            return None;
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            warn!("non-finite model parameters, discarding persisted artifact");
            return None;
        }
        if self.sample_count == 0 {
            warn!("persisted model has zero samples, discarding artifact");
            return None;
        }

        let mut weights = [0.0_f64; NUM_FEATURES];
        weights.copy_from_slice(&self.weights);
        Some(LinearModel {
            weights,
            intercept: self.intercept,
            sample_count: self.sample_count,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_fit_recovers_exact_linear_function() {
        // Noiseless data from y = 0.5t + 0.2h - 1.0w + 0.1p + 7
        let rows = [
            [20.0, 50.0, 3.0, 10.0],
            [25.0, 60.0, 5.0, 20.0],
            [15.0, 40.0, 2.0, 40.0],
            [30.0, 70.0, 8.0, 5.0],
            [10.0, 30.0, 1.0, 60.0],
            [22.0, 55.0, 4.0, 30.0],
        ];
        let targets: Vec<f64> = rows
            .iter()
            .map(|r| 0.1_f64.mul_add(r[3], 0.5_f64.mul_add(r[0], 0.2_f64.mul_add(r[1], -r[2]))) + 7.0)
            .collect();

        let model = LinearModel::fit(&rows, &targets).unwrap();

        let probe = [18.0, 45.0, 6.0, 25.0];
        let expected =
            0.1_f64.mul_add(probe[3], 0.5_f64.mul_add(probe[0], 0.2_f64.mul_add(probe[1], -probe[2]))) + 7.0;
        assert!(
            (model.predict(&probe) - expected).abs() < 1e-6,
            "predicted {}, expected {expected}",
            model.predict(&probe)
        );
        assert_eq!(model.sample_count(), 6);
    }

    #[test]
    fn test_single_row_fits_intercept_only_recall() {
        let rows = [[22.0, 50.0, 3.0, 10.0]];
        let targets = [87.0];

        let model = LinearModel::fit(&rows, &targets).unwrap();

        assert!((model.predict(&rows[0]) - 87.0).abs() < 1e-9);
        // Degenerate system resolves only the intercept
        assert!((model.intercept - 87.0).abs() < 1e-9);
        assert!(model.weights.iter().all(|w| w.abs() < 1e-9));
    }

    #[test]
    fn test_duplicate_rows_fit_mean() {
        let rows = [[20.0, 60.0, 2.0, 0.0]; 4];
        let targets = [80.0, 90.0, 90.0, 100.0];

        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!((model.predict(&rows[0]) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_rejects_empty_training_set() {
        assert!(LinearModel::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_fit_rejects_length_mismatch() {
        let rows = [[1.0, 2.0, 3.0, 4.0]];
        assert!(LinearModel::fit(&rows, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_state_roundtrip() {
        let rows = [[22.0, 50.0, 3.0, 10.0], [10.0, 80.0, 6.0, 70.0]];
        let targets = [90.0, 40.0];
        let model = LinearModel::fit(&rows, &targets).unwrap();

        let state = ModelState::from_model(&model, Utc::now());
        let restored = state.to_model().unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_version_mismatch_discards_state() {
        let model = LinearModel::fit(&[[1.0, 2.0, 3.0, 4.0]], &[50.0]).unwrap();
        let mut state = ModelState::from_model(&model, Utc::now());
        state.version = 99;
        assert!(state.to_model().is_none());
    }

    #[test]
    fn test_invalid_weight_count_discards_state() {
        let model = LinearModel::fit(&[[1.0, 2.0, 3.0, 4.0]], &[50.0]).unwrap();
        let mut state = ModelState::from_model(&model, Utc::now());
        state.weights.pop();
        assert!(state.to_model().is_none());
    }
}
