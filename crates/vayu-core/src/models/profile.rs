// ABOUTME: Per-user comfort preference profile with closed categorical types
// ABOUTME: Defines ComfortProfile, tolerance levels, rain preference, and activity level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance class for humidity and wind preferences
///
/// Each categorical field on a profile is a closed enum parsed at
/// construction time. An unrecognized value is a hard `InvalidProfile`
/// error, never a silent default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceLevel {
    /// Prefers calm/dry conditions
    Low,
    /// Moderate tolerance
    #[default]
    Medium,
    /// Comfortable with stronger conditions
    High,
}

impl ToleranceLevel {
    /// Canonical string form (matches the serialized representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for ToleranceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_profile(format!(
                "Unknown tolerance level: '{other}'. Valid options: low, medium, high"
            ))),
        }
    }
}

impl fmt::Display for ToleranceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a user feels about rain
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RainPreference {
    /// Avoids rain wherever possible
    Dislike,
    /// Indifferent to rain
    #[default]
    Neutral,
    /// Enjoys rainy weather
    Like,
}

impl RainPreference {
    /// Canonical string form (matches the serialized representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dislike => "dislike",
            Self::Neutral => "neutral",
            Self::Like => "like",
        }
    }
}

impl FromStr for RainPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dislike" => Ok(Self::Dislike),
            "neutral" => Ok(Self::Neutral),
            "like" => Ok(Self::Like),
            other => Err(AppError::invalid_profile(format!(
                "Unknown rain preference: '{other}'. Valid options: dislike, neutral, like"
            ))),
        }
    }
}

impl fmt::Display for RainPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outdoor activity level; drives both the temperature decay rate and the
/// dimension weights of the comfort formula
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Indoor-focused
    Low,
    /// Balanced outdoor activity
    #[default]
    Medium,
    /// Very active outdoors
    High,
}

impl ActivityLevel {
    /// Canonical string form (matches the serialized representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_profile(format!(
                "Unknown activity level: '{other}'. Valid options: low, medium, high"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user comfort preference parameters consumed by the comfort formula
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComfortProfile {
    /// Inclusive comfortable temperature band lower bound (°C)
    pub temp_min: i32,
    /// Inclusive comfortable temperature band upper bound (°C)
    pub temp_max: i32,
    /// Humidity tolerance class
    pub humidity_tolerance: ToleranceLevel,
    /// Wind tolerance class
    pub wind_tolerance: ToleranceLevel,
    /// Rain preference
    pub rain_preference: RainPreference,
    /// Outdoor activity level
    pub activity_level: ActivityLevel,
}

impl Default for ComfortProfile {
    fn default() -> Self {
        Self {
            temp_min: defaults::TEMP_MIN,
            temp_max: defaults::TEMP_MAX,
            humidity_tolerance: ToleranceLevel::Medium,
            wind_tolerance: ToleranceLevel::Medium,
            rain_preference: RainPreference::Neutral,
            activity_level: ActivityLevel::Medium,
        }
    }
}

impl ComfortProfile {
    /// Validate the profile invariants
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidProfile` if `temp_min > temp_max`.
    pub fn validate(&self) -> AppResult<()> {
        if self.temp_min > self.temp_max {
            return Err(AppError::invalid_profile(format!(
                "temp_min ({}) must not exceed temp_max ({})",
                self.temp_min, self.temp_max
            )));
        }
        Ok(())
    }

    /// Build a profile from raw string/integer fields, failing fast on any
    /// unrecognized categorical value
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidProfile` if a categorical value is unknown
    /// or the temperature band is inverted.
    pub fn from_parts(
        temp_min: i32,
        temp_max: i32,
        humidity_tolerance: &str,
        wind_tolerance: &str,
        rain_preference: &str,
        activity_level: &str,
    ) -> AppResult<Self> {
        let profile = Self {
            temp_min,
            temp_max,
            humidity_tolerance: humidity_tolerance.parse()?,
            wind_tolerance: wind_tolerance.parse()?,
            rain_preference: rain_preference.parse()?,
            activity_level: activity_level.parse()?,
        };
        profile.validate()?;
        Ok(profile)
    }
}
