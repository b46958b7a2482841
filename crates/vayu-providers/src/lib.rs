// ABOUTME: Weather data provider implementations for NASA POWER and Open-Meteo
// ABOUTME: Core provider trait, shared HTTP client, geocoding, and the fallback chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![deny(unsafe_code)]

//! Weather data provider implementations and core abstractions.
//!
//! This crate provides the unified provider system for fetching current
//! weather conditions from external sources. NASA POWER (satellite-derived)
//! is the primary source; Open-Meteo (numerical forecast) is the fallback.
//! Each provider reports the provenance of its data so the comfort pipeline
//! can weight its trust in the learned model accordingly.

/// Core provider trait and resolved-location type
pub mod core;
/// Location name to coordinates resolution via the Open-Meteo geocoding API
pub mod geocoding;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// NASA POWER provider for satellite-derived meteorological data
pub mod nasa_power;
/// Open-Meteo provider for real-time numerical weather forecasts
pub mod open_meteo;
/// Primary-with-fallback provider chain
pub mod service;

pub use core::{ProviderStatus, WeatherProvider};
pub use geocoding::{Geocoder, ResolvedLocation};
pub use http_client::{initialize_shared_client, shared_client};
pub use nasa_power::NasaPowerProvider;
pub use open_meteo::OpenMeteoProvider;
pub use service::WeatherService;
