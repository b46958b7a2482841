// ABOUTME: Session-keyed user model with embedded comfort preference profile
// ABOUTME: Users are created implicitly on first request and updated by settings saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use crate::models::ComfortProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A VAYU user, keyed by an opaque session identifier
///
/// Users are created implicitly with a default `ComfortProfile` on their
/// first request; the profile is mutated only by an explicit settings update
/// and never deleted while the user exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable user ID
    pub id: Uuid,
    /// Opaque session identifier presented by the client
    pub session_id: String,
    /// The user's last requested location, if any
    pub location: Option<String>,
    /// Comfort preference parameters
    pub profile: ComfortProfile,
    /// Whether the user has completed the settings flow
    pub settings_completed: bool,
    /// When the user was first seen
    pub created_at: DateTime<Utc>,
    /// When the user was last active
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default comfort profile
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            location: None,
            profile: ComfortProfile::default(),
            settings_completed: false,
            created_at: now,
            last_active: now,
        }
    }
}
