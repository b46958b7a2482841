// ABOUTME: NASA POWER API provider for satellite-derived meteorological data
// ABOUTME: Fetches daily point data, derives feels-like and condition, reports satellite provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

//! # NASA POWER Provider
//!
//! Client for NASA's Prediction of Worldwide Energy Resources (POWER) API.
//! POWER serves global meteorological data from satellite observations and
//! assimilation models at daily resolution, with a publication delay of
//! several days; the request window looks one week back to stay inside the
//! published range and the most recent available day is used.

use crate::core::WeatherProvider;
use crate::http_client::shared_client;
use async_trait::async_trait;
use chrono::{Days, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use vayu_core::errors::{AppError, AppResult};
use vayu_core::models::{CurrentWeather, Provenance, WeatherCondition, WeatherObservation};

/// Default NASA POWER API base URL
pub const DEFAULT_NASA_POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal";

/// POWER community whose parameter set we request
const COMMUNITY: &str = "ag";

/// Daily parameters needed for comfort scoring
const DAILY_PARAMETERS: &str = "T2M,T2M_MIN,T2M_MAX,RH2M,WS2M,PRECTOTCORR,PS,T2MDEW,ALLSKY_SFC_SW_DWN";

/// POWER publishes daily data with a processing delay; look this far back
const DATA_DELAY_DAYS: u64 = 7;

/// POWER encodes missing samples as -999; anything below this is a fill value
const FILL_VALUE_THRESHOLD: f64 = -900.0;

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: HashMap<String, BTreeMap<String, Option<f64>>>,
}

/// One day's worth of POWER parameter values
struct DailyParameters<'a> {
    parameter: &'a HashMap<String, BTreeMap<String, Option<f64>>>,
    date: &'a str,
}

impl DailyParameters<'_> {
    /// Extract a parameter value, treating fill values as missing
    fn value(&self, name: &str) -> Option<f64> {
        self.parameter
            .get(name)?
            .get(self.date)
            .copied()
            .flatten()
            .filter(|v| *v > FILL_VALUE_THRESHOLD)
    }

    fn value_or(&self, name: &str, default: f64) -> f64 {
        self.value(name).unwrap_or(default)
    }
}

/// NASA POWER weather provider (satellite-derived provenance)
#[derive(Debug, Clone)]
pub struct NasaPowerProvider {
    base_url: String,
}

impl Default for NasaPowerProvider {
    fn default() -> Self {
        Self::new(DEFAULT_NASA_POWER_BASE_URL)
    }
}

impl NasaPowerProvider {
    /// Create a provider against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for NasaPowerProvider {
    fn name(&self) -> &'static str {
        "NASA POWER"
    }

    fn description(&self) -> &'static str {
        "Satellite-derived meteorological data"
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        let end = Utc::now().date_naive() - Days::new(DATA_DELAY_DAYS);
        let start = end - Days::new(1);

        let url = format!("{}/daily/point", self.base_url);
        let response = shared_client()
            .get(&url)
            .query(&[
                ("parameters", DAILY_PARAMETERS),
                ("community", COMMUNITY),
                ("longitude", &longitude.to_string()),
                ("latitude", &latitude.to_string()),
                ("start", &start.format("%Y%m%d").to_string()),
                ("end", &end.format("%Y%m%d").to_string()),
                ("format", "JSON"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("NASA POWER", format!("request failed: {e}"))
            })?
            .error_for_status()
            .map_err(|e| AppError::external_service("NASA POWER", format!("bad status: {e}")))?;

        let body: PowerResponse = response.json().await.map_err(|e| {
            AppError::external_service("NASA POWER", format!("invalid response body: {e}"))
        })?;

        let weather = process_daily(&body.properties.parameter)?;
        debug!(
            lat = latitude,
            lon = longitude,
            temperature = ?weather.observation.temperature,
            "NASA POWER data retrieved"
        );
        Ok(weather)
    }
}

/// Turn a POWER daily parameter map into `CurrentWeather`, using the most
/// recent day that has temperature data
fn process_daily(
    parameter: &HashMap<String, BTreeMap<String, Option<f64>>>,
) -> AppResult<CurrentWeather> {
    let latest_date = parameter
        .get("T2M")
        .and_then(|days| days.keys().next_back())
        .ok_or_else(|| {
            AppError::external_service("NASA POWER", "no temperature data in response")
        })?
        .clone();

    let daily = DailyParameters {
        parameter,
        date: &latest_date,
    };

    let temperature = daily.value_or("T2M", 20.0);
    let humidity = daily.value_or("RH2M", 50.0);
    let wind_speed = daily.value_or("WS2M", 0.0);
    let precipitation_mm = daily.value_or("PRECTOTCORR", 0.0);
    let dew_point = daily.value("T2MDEW").unwrap_or(temperature - 10.0);
    let solar_irradiance = daily.value_or("ALLSKY_SFC_SW_DWN", 5.0);

    // mm/day to a probability via the linear clamp
    let precipitation_probability = (precipitation_mm * 10.0).min(100.0);

    Ok(CurrentWeather {
        observation: WeatherObservation::new(
            temperature,
            humidity,
            wind_speed,
            precipitation_probability,
        ),
        provenance: Provenance::SatelliteDerived,
        provider: "NASA POWER".to_owned(),
        feels_like: Some(feels_like(temperature, humidity, wind_speed)),
        dew_point: Some(dew_point),
        solar_irradiance: Some(solar_irradiance),
        condition: Some(condition_for(temperature, precipitation_mm, solar_irradiance)),
    })
}

/// Feels-like temperature: simplified heat index for hot weather, wind chill
/// for cold windy weather, the raw temperature otherwise
fn feels_like(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    if temperature >= 27.0 {
        (0.4 * (temperature - 10.0)).mul_add(humidity / 100.0, temperature)
    } else if temperature <= 10.0 && wind_speed > 1.3 {
        let wind_factor = (wind_speed * 3.6).powf(0.16);
        (0.3965 * temperature).mul_add(
            wind_factor,
            0.6215_f64.mul_add(temperature, 11.37_f64.mul_add(-wind_factor, 13.12)),
        )
    } else {
        temperature
    }
}

/// Coarse condition classification from precipitation and solar irradiance
fn condition_for(temperature: f64, precipitation_mm: f64, solar: f64) -> WeatherCondition {
    if precipitation_mm > 5.0 {
        if temperature < 0.0 {
            WeatherCondition::Snow
        } else if precipitation_mm > 15.0 {
            WeatherCondition::HeavyRain
        } else {
            WeatherCondition::Rain
        }
    } else if solar < 2.0 {
        WeatherCondition::Cloudy
    } else if solar > 8.0 {
        WeatherCondition::Sunny
    } else {
        WeatherCondition::PartlyCloudy
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn canned_parameters(json: &str) -> HashMap<String, BTreeMap<String, Option<f64>>> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_process_daily_extracts_latest_day() {
        let parameter = canned_parameters(
            r#"{
                "T2M": {"20250728": 21.0, "20250729": 24.5},
                "RH2M": {"20250728": 60.0, "20250729": 55.0},
                "WS2M": {"20250728": 2.0, "20250729": 3.0},
                "PRECTOTCORR": {"20250728": 0.0, "20250729": 2.5},
                "ALLSKY_SFC_SW_DWN": {"20250728": 6.0, "20250729": 9.0}
            }"#,
        );

        let weather = process_daily(&parameter).unwrap();
        assert_eq!(weather.observation.temperature, Some(24.5));
        assert_eq!(weather.observation.relative_humidity, Some(55.0));
        assert_eq!(weather.observation.wind_speed, Some(3.0));
        // 2.5 mm/day -> 25 % via the linear clamp
        assert_eq!(weather.observation.precipitation_probability, Some(25.0));
        assert_eq!(weather.provenance, Provenance::SatelliteDerived);
        assert_eq!(weather.condition, Some(WeatherCondition::Sunny));
    }

    #[test]
    fn test_precipitation_probability_clamps_at_100() {
        let parameter = canned_parameters(
            r#"{
                "T2M": {"20250729": 18.0},
                "PRECTOTCORR": {"20250729": 30.0}
            }"#,
        );

        let weather = process_daily(&parameter).unwrap();
        assert_eq!(weather.observation.precipitation_probability, Some(100.0));
        assert_eq!(weather.condition, Some(WeatherCondition::HeavyRain));
    }

    #[test]
    fn test_fill_values_fall_back_to_defaults() {
        let parameter = canned_parameters(
            r#"{
                "T2M": {"20250729": 22.0},
                "RH2M": {"20250729": -999.0},
                "WS2M": {"20250729": null}
            }"#,
        );

        let weather = process_daily(&parameter).unwrap();
        assert_eq!(weather.observation.relative_humidity, Some(50.0));
        assert_eq!(weather.observation.wind_speed, Some(0.0));
    }

    #[test]
    fn test_missing_temperature_is_an_error() {
        let parameter = canned_parameters(r#"{"RH2M": {"20250729": 50.0}}"#);
        assert!(process_daily(&parameter).is_err());
    }

    #[test]
    fn test_feels_like_heat_index_branch() {
        // 30 °C at 80 % humidity: 30 + 0.4 * 20 * 0.8 = 36.4
        assert!((feels_like(30.0, 80.0, 1.0) - 36.4).abs() < 1e-9);
    }

    #[test]
    fn test_feels_like_wind_chill_branch() {
        let result = feels_like(0.0, 50.0, 5.0);
        // Wind chill must read colder than the air temperature
        assert!(result < 0.0);
    }

    #[test]
    fn test_feels_like_moderate_conditions_passthrough() {
        assert!((feels_like(18.0, 50.0, 2.0) - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_condition_snow_when_freezing() {
        assert_eq!(condition_for(-3.0, 8.0, 5.0), WeatherCondition::Snow);
    }
}
