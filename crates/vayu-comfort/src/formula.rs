// ABOUTME: Pure multi-factor comfort formula with per-user parameterization
// ABOUTME: Weighted temperature/humidity/wind/precipitation scoring with recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # Comfort Formula
//!
//! Converts a weather observation plus a user's `ComfortProfile` into a
//! 0-100 comfort score with a per-dimension breakdown, a classification, and
//! ordered advisory strings. The formula is pure and deterministic: no I/O,
//! no mutable state, and no failure modes (missing observation fields are
//! substituted with documented defaults).
//!
//! Each dimension is scored in [0, 100] and combined with weights chosen by
//! the profile's activity level; the weights always sum to 1.0.

use vayu_core::models::{
    ActivityLevel, ComfortBreakdown, ComfortProfile, ComfortResult, RainPreference,
    ToleranceLevel, WeatherObservation,
};

/// m/s to km/h conversion factor
const MS_TO_KMH: f64 = 3.6;

/// Fixed wind sub-score below the preferred band: calm is merely suboptimal
const TOO_CALM_SCORE: f64 = 80.0;

/// Humidity penalty per percentage point outside the comfort band
const HUMIDITY_DECAY_PER_POINT: f64 = 1.5;

/// Wind penalty per km/h above the comfort band
const WIND_DECAY_PER_KMH: f64 = 2.5;

/// Dimension weights for combining sub-scores, summing to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    /// Weight of the temperature sub-score
    pub temperature: f64,
    /// Weight of the humidity sub-score
    pub humidity: f64,
    /// Weight of the wind sub-score
    pub wind: f64,
    /// Weight of the precipitation sub-score
    pub precipitation: f64,
}

impl DimensionWeights {
    /// Weights for the given activity level
    #[must_use]
    pub const fn for_activity(activity: ActivityLevel) -> Self {
        match activity {
            // Indoor-focused
            ActivityLevel::Low => Self {
                temperature: 0.40,
                humidity: 0.30,
                wind: 0.10,
                precipitation: 0.20,
            },
            // Balanced outdoor activity
            ActivityLevel::Medium => Self {
                temperature: 0.35,
                humidity: 0.25,
                wind: 0.15,
                precipitation: 0.25,
            },
            // Very active outdoors
            ActivityLevel::High => Self {
                temperature: 0.30,
                humidity: 0.20,
                wind: 0.20,
                precipitation: 0.30,
            },
        }
    }

    /// Sum of the four weights (1.0 up to floating-point error)
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.temperature + self.humidity + self.wind + self.precipitation
    }
}

/// Temperature decay factor per activity level: higher activity tolerates
/// wider excursions outside the preferred band
const fn temperature_decay_factor(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Low => 3.0,
        ActivityLevel::Medium => 5.0,
        ActivityLevel::High => 7.0,
    }
}

/// Humidity comfort band (%) per tolerance class
const fn humidity_band(tolerance: ToleranceLevel) -> (f64, f64) {
    match tolerance {
        // Prefers dry conditions
        ToleranceLevel::Low => (20.0, 50.0),
        // Moderate humidity
        ToleranceLevel::Medium => (30.0, 70.0),
        // Comfortable with high humidity
        ToleranceLevel::High => (40.0, 85.0),
    }
}

/// Wind comfort band (km/h) per tolerance class
const fn wind_band_kmh(tolerance: ToleranceLevel) -> (f64, f64) {
    match tolerance {
        // Prefers calm conditions
        ToleranceLevel::Low => (0.0, 15.0),
        // Light breeze preferred
        ToleranceLevel::Medium => (5.0, 25.0),
        // Enjoys stronger winds
        ToleranceLevel::High => (10.0, 35.0),
    }
}

/// Precipitation sub-score from the tiered probability table
fn precipitation_score(probability: f64, preference: RainPreference) -> f64 {
    if probability <= 20.0 {
        // Low chance of rain
        match preference {
            RainPreference::Dislike => 100.0,
            RainPreference::Neutral => 95.0,
            RainPreference::Like => 80.0,
        }
    } else if probability <= 50.0 {
        // Moderate chance
        match preference {
            RainPreference::Dislike => 60.0,
            RainPreference::Neutral => 75.0,
            RainPreference::Like => 90.0,
        }
    } else {
        // High chance of rain
        match preference {
            RainPreference::Dislike => 20.0,
            RainPreference::Neutral => 50.0,
            RainPreference::Like => 85.0,
        }
    }
}

/// Classify a standalone formula score into a label and color token
///
/// Note: the blended pipeline uses a different, coarser table; see
/// [`crate::blend::classify_blended`]. The divergence is deliberate.
#[must_use]
pub const fn classify_formula(score: u8) -> (&'static str, &'static str) {
    if score >= 80 {
        ("Very Comfortable", "green")
    } else if score >= 60 {
        ("Comfortable", "lightgreen")
    } else if score >= 40 {
        ("Moderately Uncomfortable", "orange")
    } else if score >= 20 {
        ("Uncomfortable", "red")
    } else {
        ("Very Uncomfortable", "darkred")
    }
}

/// Personalized weather comfort formula
///
/// Owns the user's `ComfortProfile` and scores observations against it.
#[derive(Debug, Clone)]
pub struct ComfortFormula {
    profile: ComfortProfile,
}

impl ComfortFormula {
    /// Create a formula parameterized by the given profile
    #[must_use]
    pub const fn new(profile: ComfortProfile) -> Self {
        Self { profile }
    }

    /// Compute the comfort score, breakdown, classification, and
    /// recommendations for an observation
    #[must_use]
    pub fn score(&self, observation: &WeatherObservation) -> ComfortResult {
        let temperature = observation.temperature();
        let humidity = observation.relative_humidity();
        let wind_speed = observation.wind_speed();
        let precipitation = observation.precipitation_probability();

        let temperature_score = self.temperature_comfort(temperature);
        let humidity_score = self.humidity_comfort(humidity);
        let wind_score = self.wind_comfort(wind_speed);
        let precip_score = precipitation_score(precipitation, self.profile.rain_preference);

        let weights = DimensionWeights::for_activity(self.profile.activity_level);
        let overall = weights.temperature.mul_add(
            temperature_score,
            weights.humidity.mul_add(
                humidity_score,
                weights
                    .wind
                    .mul_add(wind_score, weights.precipitation * precip_score),
            ),
        );

        let overall_score = overall.round().clamp(0.0, 100.0) as u8;
        let (comfort_level, comfort_color) = classify_formula(overall_score);

        let recommendations =
            self.recommendations(overall, temperature, humidity, wind_speed, precipitation);

        ComfortResult {
            overall_score,
            comfort_level: comfort_level.to_owned(),
            comfort_color: comfort_color.to_owned(),
            breakdown: ComfortBreakdown {
                temperature: temperature_score.round() as u8,
                humidity: humidity_score.round() as u8,
                wind: wind_score.round() as u8,
                precipitation: precip_score.round() as u8,
            },
            recommendations,
            data_quality: None,
            satellite_derived: false,
        }
    }

    /// Temperature sub-score: 100 inside the preferred band, exponential
    /// decay outside it
    fn temperature_comfort(&self, temperature: f64) -> f64 {
        let temp_min = f64::from(self.profile.temp_min);
        let temp_max = f64::from(self.profile.temp_max);

        if (temp_min..=temp_max).contains(&temperature) {
            return 100.0;
        }

        let distance = if temperature < temp_min {
            temp_min - temperature
        } else {
            temperature - temp_max
        };

        let factor = temperature_decay_factor(self.profile.activity_level);
        (100.0 * (-distance / factor).exp()).max(0.0)
    }

    /// Humidity sub-score: 100 inside the tolerance band, linear decay
    /// outside it
    fn humidity_comfort(&self, humidity: f64) -> f64 {
        let (min_comfort, max_comfort) = humidity_band(self.profile.humidity_tolerance);

        if (min_comfort..=max_comfort).contains(&humidity) {
            return 100.0;
        }

        let distance = if humidity < min_comfort {
            min_comfort - humidity
        } else {
            humidity - max_comfort
        };

        HUMIDITY_DECAY_PER_POINT.mul_add(-distance, 100.0).max(0.0)
    }

    /// Wind sub-score: 100 inside the tolerance band, a fixed 80 below it
    /// (too calm), linear decay above it
    fn wind_comfort(&self, wind_speed: f64) -> f64 {
        let wind_kmh = wind_speed * MS_TO_KMH;
        let (min_wind, max_wind) = wind_band_kmh(self.profile.wind_tolerance);

        if (min_wind..=max_wind).contains(&wind_kmh) {
            return 100.0;
        }

        if wind_kmh < min_wind {
            return TOO_CALM_SCORE;
        }

        let excess = wind_kmh - max_wind;
        WIND_DECAY_PER_KMH.mul_add(-excess, 100.0).max(0.0)
    }

    /// Generate ordered advisory strings from independent rule checks
    ///
    /// Rules are evaluated in a fixed order so output is deterministic:
    /// overall-score banding, temperature deviation, humidity extremes,
    /// strong wind, precipitation. A neutral fallback is emitted when no
    /// rule fires.
    fn recommendations(
        &self,
        overall: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        precipitation: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        // Score-based general recommendations
        if overall >= 80.0 {
            recommendations.push("Perfect weather for all your planned activities!".to_owned());
        } else if overall >= 60.0 {
            recommendations.push("Good weather with minor adjustments needed.".to_owned());
        } else if overall < 40.0 {
            recommendations
                .push("Consider indoor activities or take extra precautions.".to_owned());
        }

        // Temperature-specific recommendations, two tiers each side of the band
        let temp_min = f64::from(self.profile.temp_min);
        let temp_max = f64::from(self.profile.temp_max);
        if temperature < temp_min - 3.0 {
            recommendations.push("Much colder than your preference. Dress warmly!".to_owned());
        } else if temperature < temp_min {
            recommendations.push(format!(
                "Cooler than your preference ({temperature}°C). Light jacket recommended."
            ));
        } else if temperature > temp_max + 3.0 {
            recommendations
                .push("Much hotter than your preference. Stay hydrated and seek shade!".to_owned());
        } else if temperature > temp_max {
            recommendations.push(format!(
                "Warmer than your preference ({temperature}°C). Light clothing and hydration advised."
            ));
        }

        // Humidity extremes
        if humidity > 85.0 {
            recommendations
                .push("Very high humidity. Choose breathable fabrics and stay cool.".to_owned());
        } else if humidity < 25.0 {
            recommendations
                .push("Very dry conditions. Stay hydrated and use moisturizer.".to_owned());
        }

        // Strong wind
        let wind_kmh = wind_speed * MS_TO_KMH;
        if wind_kmh > 30.0 {
            recommendations.push(format!(
                "Very windy conditions ({wind_kmh:.0} km/h). Secure loose items."
            ));
        }

        // Precipitation
        if precipitation > 70.0 {
            recommendations
                .push("High chance of rain. Bring umbrella and waterproof gear.".to_owned());
        } else if precipitation > 40.0 {
            recommendations.push("Possible rain. Consider bringing an umbrella.".to_owned());
        }

        if recommendations.is_empty() {
            recommendations.push("Weather conditions noted in your assessment.".to_owned());
        }

        recommendations
    }
}
