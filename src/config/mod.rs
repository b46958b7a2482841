// ABOUTME: Configuration module for the VAYU server
// ABOUTME: Environment-based settings for HTTP, database, logging, and providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! Server configuration management

/// Environment variable backed configuration
pub mod environment;

pub use environment::{LogFormat, ProviderUrls, ServerConfig};
