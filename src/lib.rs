// ABOUTME: Main library entry point for the VAYU weather comfort server
// ABOUTME: Wires configuration, database, providers, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![deny(unsafe_code)]

//! # VAYU Server
//!
//! A weather comfort API that blends a deterministic, per-user comfort
//! formula with a continuously retrained regression model fit on user
//! feedback.
//!
//! ## Architecture
//!
//! The server follows a modular workspace architecture:
//! - **vayu-core**: shared error handling, domain models, and constants
//! - **vayu-comfort**: the comfort formula, regression model, and blender
//! - **vayu-providers**: NASA POWER and Open-Meteo weather providers
//! - **this crate**: configuration, SQLite persistence, and the HTTP layer
//!
//! ## Scoring pipeline
//!
//! geocode → fetch weather (NASA POWER, Open-Meteo fallback) → comfort
//! formula → log features and score → retrain per-location model → predict →
//! blend by provenance → respond.

/// Environment-based server configuration
pub mod config;

/// SQLite persistence for users, weather logs, predictions, and model artifacts
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP routes and application state
pub mod routes;

// Re-export foundation modules so binaries and integration tests use one path
pub use vayu_core::constants;
pub use vayu_core::errors;
pub use vayu_core::models;

/// Comfort scoring and adaptive prediction engine
pub use vayu_comfort as comfort;

/// Weather data providers and geocoding
pub use vayu_providers as providers;
