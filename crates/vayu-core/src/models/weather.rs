// ABOUTME: Weather observation models and data-source provenance classification
// ABOUTME: Defines WeatherObservation, Provenance, WeatherCondition, and CurrentWeather
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// A snapshot of current weather conditions at a location
///
/// Immutable once constructed; one instance per scoring request. Fields a
/// provider could not supply are `None` and are substituted with documented
/// defaults by the accessor methods.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    /// Air temperature (°C)
    pub temperature: Option<f64>,
    /// Relative humidity (%, 0-100)
    pub relative_humidity: Option<f64>,
    /// Wind speed (m/s, >= 0)
    pub wind_speed: Option<f64>,
    /// Precipitation probability (%, 0-100)
    pub precipitation_probability: Option<f64>,
}

impl WeatherObservation {
    /// Construct an observation with every field present
    #[must_use]
    pub const fn new(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        precipitation_probability: f64,
    ) -> Self {
        Self {
            temperature: Some(temperature),
            relative_humidity: Some(relative_humidity),
            wind_speed: Some(wind_speed),
            precipitation_probability: Some(precipitation_probability),
        }
    }

    /// Temperature, substituting 20 °C when missing
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(defaults::OBSERVATION_TEMPERATURE)
    }

    /// Relative humidity, substituting 50 % when missing
    #[must_use]
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
            .unwrap_or(defaults::OBSERVATION_HUMIDITY)
    }

    /// Wind speed, substituting 0 m/s when missing
    #[must_use]
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed.unwrap_or(defaults::OBSERVATION_WIND_SPEED)
    }

    /// Precipitation probability, substituting 0 % when missing
    #[must_use]
    pub fn precipitation_probability(&self) -> f64 {
        self.precipitation_probability
            .unwrap_or(defaults::OBSERVATION_PRECIPITATION)
    }
}

/// Classification of a weather observation's data-source quality
///
/// Drives the trust weighting applied to the learned model's prediction when
/// blending: satellite-derived observations carry a higher mixing weight than
/// fallback numerical forecasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Satellite-derived meteorological data (NASA POWER)
    SatelliteDerived,
    /// Numerical weather prediction model output (Open-Meteo fallback)
    NumericalForecast,
}

impl Provenance {
    /// Whether the observation came from the satellite-derived source
    #[must_use]
    pub const fn is_satellite(self) -> bool {
        matches!(self, Self::SatelliteDerived)
    }

    /// Data quality token exposed in API responses
    #[must_use]
    pub const fn data_quality(self) -> &'static str {
        match self {
            Self::SatelliteDerived => "satellite_derived",
            Self::NumericalForecast => "numerical_weather_model",
        }
    }
}

/// Coarse weather condition derived from provider parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky, high solar irradiance
    Sunny,
    /// Moderate cloud cover
    PartlyCloudy,
    /// Low solar irradiance
    Cloudy,
    /// Light rain
    Rain,
    /// Heavy rain
    HeavyRain,
    /// Snowfall
    Snow,
}

impl WeatherCondition {
    /// Human-readable description for API responses
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Light Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
        }
    }
}

/// A provider's answer to "what is the weather right now"
///
/// Bundles the core observation with its provenance and the enriched
/// parameters only some providers can supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// The core observation consumed by the comfort formula
    pub observation: WeatherObservation,
    /// Data-source quality classification
    pub provenance: Provenance,
    /// Name of the provider that supplied the data
    pub provider: String,
    /// Derived feels-like temperature (°C), when computable
    pub feels_like: Option<f64>,
    /// Dew point temperature (°C), when available
    pub dew_point: Option<f64>,
    /// All-sky surface shortwave downward irradiance (kW-hr/m²/day)
    pub solar_irradiance: Option<f64>,
    /// Coarse condition classification, when derivable
    pub condition: Option<WeatherCondition>,
}
