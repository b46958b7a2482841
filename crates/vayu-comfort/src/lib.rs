// ABOUTME: Comfort scoring and adaptive prediction engine for the VAYU platform
// ABOUTME: Pure comfort formula, per-location OLS regression model, and score blending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![deny(unsafe_code)]

//! # VAYU Comfort Engine
//!
//! The algorithmic core of the VAYU platform:
//!
//! - **formula**: the pure, deterministic multi-factor comfort formula that
//!   converts a weather observation plus a user's preference profile into a
//!   0-100 score with classification and recommendations
//! - **regression**: a hand-rolled ordinary-least-squares linear model over
//!   the 4-dimensional weather feature vector
//! - **adaptive**: the per-location retrain-and-predict cycle over stored
//!   user feedback, with injected storage collaborators
//! - **blend**: provenance-weighted mixing of the formula score with the
//!   learned model's prediction

/// Adaptive per-location model registry with retrain/predict cycle
pub mod adaptive;
/// Provenance-weighted blending of formula and model scores
pub mod blend;
/// Pure multi-factor comfort formula
pub mod formula;
/// Ordinary-least-squares linear regression model
pub mod regression;

pub use adaptive::{AdaptiveModel, FeedbackStore, ModelStore, UNTRAINED_SCORE};
pub use blend::{classify_blended, mixing_weight, ScoreBlender};
pub use formula::{classify_formula, ComfortFormula, DimensionWeights};
pub use regression::{LinearModel, ModelState, NUM_FEATURES};
