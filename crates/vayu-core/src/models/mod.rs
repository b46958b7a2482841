// ABOUTME: Core data models and types for the VAYU weather comfort platform
// ABOUTME: Re-exports ComfortProfile, WeatherObservation, ComfortResult and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Data Models
//!
//! Core data structures used throughout the VAYU server. These models provide
//! a unified representation of user preferences, weather observations, and
//! comfort scoring results regardless of which upstream weather provider
//! supplied the data.
//!
//! ## Core Models
//!
//! - `ComfortProfile`: Per-user comfort preference parameters
//! - `WeatherObservation`: A snapshot of current weather conditions
//! - `ComfortResult`: The scored, classified output of the comfort pipeline
//! - `FeedbackRecord`: A logged (features, score, feedback) training tuple
//! - `User`: Session-keyed user with an embedded comfort profile

// Domain modules
mod comfort;
mod feedback;
mod profile;
mod user;
mod weather;

// Re-export all public types for convenience
pub use comfort::{ComfortBreakdown, ComfortResult};
pub use feedback::{FeedbackLabel, FeedbackRecord, PredictionRecord, WeatherFeatures};
pub use profile::{ActivityLevel, ComfortProfile, RainPreference, ToleranceLevel};
pub use user::User;
pub use weather::{CurrentWeather, Provenance, WeatherCondition, WeatherObservation};
