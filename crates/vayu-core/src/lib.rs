// ABOUTME: Core types and constants for the VAYU weather comfort platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![deny(unsafe_code)]

//! # VAYU Core
//!
//! Foundation crate providing shared types and constants for the VAYU weather
//! comfort platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data models (`ComfortProfile`, `WeatherObservation`, `ComfortResult`, ...)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`ComfortProfile`, `WeatherObservation`, `FeedbackRecord`, etc.)
pub mod models;
