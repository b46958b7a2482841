// ABOUTME: Integration tests for the comfort formula through the public API
// ABOUTME: Covers sub-score bands, decay curves, weights, classification, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VAYU Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{default_profile, observation, profile};
use vayu_server::comfort::{classify_formula, ComfortFormula, DimensionWeights};
use vayu_server::models::{
    ActivityLevel, ComfortProfile, RainPreference, ToleranceLevel, WeatherObservation,
};

// === Temperature sub-score ===

#[test]
fn test_temperature_inside_band_scores_100() {
    let formula = ComfortFormula::new(default_profile());
    for temp in [18.0, 20.0, 22.0, 26.0] {
        let result = formula.score(&observation(temp, 50.0, 2.0, 0.0));
        assert_eq!(
            result.breakdown.temperature, 100,
            "temperature {temp} is inside the 18-26 band"
        );
    }
}

#[test]
fn test_temperature_decay_is_monotonically_non_increasing() {
    let formula = ComfortFormula::new(default_profile());

    let mut previous = 100;
    for step in 0..20 {
        let temp = 18.0 - f64::from(step);
        let score = formula
            .score(&observation(temp, 50.0, 2.0, 0.0))
            .breakdown
            .temperature;
        assert!(
            score <= previous,
            "score {score} at {temp}°C exceeds score {previous} one degree closer to the band"
        );
        previous = score;
    }

    // Same property above the band
    let mut previous = 100;
    for step in 0..20 {
        let temp = 26.0 + f64::from(step);
        let score = formula
            .score(&observation(temp, 50.0, 2.0, 0.0))
            .breakdown
            .temperature;
        assert!(score <= previous);
        previous = score;
    }
}

#[test]
fn test_higher_activity_tolerates_wider_temperature_excursions() {
    // 10 degrees below the band: exp(-10/3) vs exp(-10/7)
    let cold = observation(8.0, 50.0, 2.0, 0.0);

    let low = ComfortFormula::new(profile(
        18,
        26,
        ToleranceLevel::Medium,
        ToleranceLevel::Medium,
        RainPreference::Neutral,
        ActivityLevel::Low,
    ))
    .score(&cold)
    .breakdown
    .temperature;

    let high = ComfortFormula::new(profile(
        18,
        26,
        ToleranceLevel::Medium,
        ToleranceLevel::Medium,
        RainPreference::Neutral,
        ActivityLevel::High,
    ))
    .score(&cold)
    .breakdown
    .temperature;

    assert!(
        high > low,
        "high activity ({high}) should out-score low activity ({low}) off-band"
    );
}

// === Humidity sub-score ===

#[test]
fn test_humidity_inside_tolerance_band_scores_100() {
    let cases = [
        (ToleranceLevel::Low, 35.0),
        (ToleranceLevel::Medium, 50.0),
        (ToleranceLevel::High, 80.0),
    ];
    for (tolerance, humidity) in cases {
        let formula = ComfortFormula::new(profile(
            18,
            26,
            tolerance,
            ToleranceLevel::Medium,
            RainPreference::Neutral,
            ActivityLevel::Medium,
        ));
        let result = formula.score(&observation(22.0, humidity, 2.0, 0.0));
        assert_eq!(result.breakdown.humidity, 100);
    }
}

#[test]
fn test_humidity_outside_band_decays_linearly() {
    // Medium band is (30, 70); at 90 the distance is 20 -> 100 - 30 = 70
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(22.0, 90.0, 2.0, 0.0));
    assert_eq!(result.breakdown.humidity, 70);
}

// === Wind sub-score ===

#[test]
fn test_calm_wind_scores_fixed_80_not_100() {
    // 0 km/h is below the medium band's 5 km/h minimum: too calm
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(22.0, 50.0, 0.0, 0.0));
    assert_eq!(result.breakdown.wind, 80);
}

#[test]
fn test_wind_inside_band_scores_100() {
    // 3 m/s = 10.8 km/h, inside the medium (5, 25) band
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(22.0, 50.0, 3.0, 0.0));
    assert_eq!(result.breakdown.wind, 100);
}

#[test]
fn test_strong_wind_decays_beyond_band() {
    // 10 m/s = 36 km/h, 11 over the medium max: 100 - 27.5 = 72.5
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(22.0, 50.0, 10.0, 0.0));
    assert_eq!(result.breakdown.wind, 73);
}

// === Precipitation sub-score table ===

#[test]
fn test_precipitation_table_spot_checks() {
    let cases = [
        (15.0, RainPreference::Like, 80),
        (45.0, RainPreference::Like, 90),
        (90.0, RainPreference::Dislike, 20),
        (15.0, RainPreference::Dislike, 100),
        (15.0, RainPreference::Neutral, 95),
        (90.0, RainPreference::Like, 85),
    ];
    for (precipitation, preference, expected) in cases {
        let formula = ComfortFormula::new(profile(
            18,
            26,
            ToleranceLevel::Medium,
            ToleranceLevel::Medium,
            preference,
            ActivityLevel::Medium,
        ));
        let result = formula.score(&observation(22.0, 50.0, 2.0, precipitation));
        assert_eq!(
            result.breakdown.precipitation, expected,
            "precipitation {precipitation} with preference {preference}"
        );
    }
}

// === Weights ===

#[test]
fn test_dimension_weights_sum_to_one_for_every_activity_level() {
    for activity in [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High] {
        let weights = DimensionWeights::for_activity(activity);
        assert!(
            (weights.sum() - 1.0).abs() < 1e-9,
            "weights for {activity} sum to {}",
            weights.sum()
        );
    }
}

// === Overall score invariants ===

#[test]
fn test_overall_score_is_always_in_range_across_a_sweep() {
    let activities = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];
    let preferences = [
        RainPreference::Dislike,
        RainPreference::Neutral,
        RainPreference::Like,
    ];

    for activity in activities {
        for preference in preferences {
            let formula = ComfortFormula::new(profile(
                18,
                26,
                ToleranceLevel::Low,
                ToleranceLevel::High,
                preference,
                activity,
            ));
            for temp in [-40.0, -10.0, 0.0, 22.0, 45.0, 60.0] {
                for humidity in [0.0, 25.0, 50.0, 100.0] {
                    for wind in [0.0, 5.0, 20.0, 60.0] {
                        for precipitation in [0.0, 30.0, 100.0] {
                            let result = formula
                                .score(&observation(temp, humidity, wind, precipitation));
                            assert!(result.overall_score <= 100);
                            assert!(result.breakdown.temperature <= 100);
                            assert!(result.breakdown.humidity <= 100);
                            assert!(result.breakdown.wind <= 100);
                            assert!(result.breakdown.precipitation <= 100);
                            assert!(!result.recommendations.is_empty());
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_missing_observation_fields_substitute_documented_defaults() {
    // Defaults: 20 °C (in band), 50 % (in band), 0 m/s (too calm), 0 % (neutral tier 1)
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&WeatherObservation::default());

    assert_eq!(result.breakdown.temperature, 100);
    assert_eq!(result.breakdown.humidity, 100);
    assert_eq!(result.breakdown.wind, 80);
    assert_eq!(result.breakdown.precipitation, 95);
    // 0.35*100 + 0.25*100 + 0.15*80 + 0.25*95 = 95.75
    assert_eq!(result.overall_score, 96);
}

// === Classification ===

#[test]
fn test_formula_classification_thresholds() {
    assert_eq!(classify_formula(100), ("Very Comfortable", "green"));
    assert_eq!(classify_formula(85), ("Very Comfortable", "green"));
    assert_eq!(classify_formula(80), ("Very Comfortable", "green"));
    assert_eq!(classify_formula(79), ("Comfortable", "lightgreen"));
    assert_eq!(classify_formula(60), ("Comfortable", "lightgreen"));
    assert_eq!(classify_formula(59), ("Moderately Uncomfortable", "orange"));
    assert_eq!(classify_formula(40), ("Moderately Uncomfortable", "orange"));
    assert_eq!(classify_formula(39), ("Uncomfortable", "red"));
    assert_eq!(classify_formula(20), ("Uncomfortable", "red"));
    assert_eq!(classify_formula(19), ("Very Uncomfortable", "darkred"));
    assert_eq!(classify_formula(0), ("Very Uncomfortable", "darkred"));
}

// === End-to-end scenarios ===

#[test]
fn test_pleasant_conditions_scenario() {
    // Default profile, 22 °C / 50 % / 3 m/s / 10 %: temperature, humidity,
    // and wind are perfect; precipitation lands in tier 1 neutral (95)
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(22.0, 50.0, 3.0, 10.0));

    assert_eq!(result.breakdown.temperature, 100);
    assert_eq!(result.breakdown.humidity, 100);
    assert_eq!(result.breakdown.wind, 100);
    assert_eq!(result.breakdown.precipitation, 95);
    // 0.35*100 + 0.25*100 + 0.15*100 + 0.25*95 = 98.75
    assert_eq!(result.overall_score, 99);
    assert_eq!(result.comfort_level, "Very Comfortable");
    assert_eq!(result.comfort_color, "green");
    assert_eq!(
        result.recommendations,
        vec!["Perfect weather for all your planned activities!".to_owned()]
    );
}

#[test]
fn test_perfect_score_for_rain_averse_user() {
    // Same conditions but rain_preference=dislike puts tier 1 at 100
    let formula = ComfortFormula::new(profile(
        18,
        26,
        ToleranceLevel::Medium,
        ToleranceLevel::Medium,
        RainPreference::Dislike,
        ActivityLevel::Medium,
    ));
    let result = formula.score(&observation(22.0, 50.0, 3.0, 10.0));

    assert_eq!(result.breakdown.precipitation, 100);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.comfort_level, "Very Comfortable");
    assert_eq!(result.comfort_color, "green");
}

#[test]
fn test_recommendations_fire_in_fixed_order() {
    // Cold, humid, windy, and wet all at once
    let formula = ComfortFormula::new(default_profile());
    let result = formula.score(&observation(10.0, 90.0, 10.0, 80.0));

    assert_eq!(
        result.recommendations,
        vec![
            "Much colder than your preference. Dress warmly!".to_owned(),
            "Very high humidity. Choose breathable fabrics and stay cool.".to_owned(),
            "Very windy conditions (36 km/h). Secure loose items.".to_owned(),
            "High chance of rain. Bring umbrella and waterproof gear.".to_owned(),
        ]
    );
}

// === Profile validation ===

#[test]
fn test_unknown_categorical_values_fail_fast() {
    assert!("extreme".parse::<ToleranceLevel>().is_err());
    assert!("sometimes".parse::<RainPreference>().is_err());
    assert!("sedentary".parse::<ActivityLevel>().is_err());

    let result = ComfortProfile::from_parts(18, 26, "medium", "medium", "neutral", "sedentary");
    assert!(result.is_err());
}

#[test]
fn test_inverted_temperature_band_is_rejected() {
    let result = ComfortProfile::from_parts(26, 18, "medium", "medium", "neutral", "medium");
    assert!(result.is_err());
}
