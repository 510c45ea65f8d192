//! Weather hazard rules.
//!
//! Every rule is evaluated on its own and the results are unioned; only the
//! two heat bands are exclusive of each other. A rule whose input field is
//! missing from the reading does not fire.

use skyguard_core::{AssessmentSource, HazardAssessment};

use crate::types::WeatherReading;

pub const EXTREME_HEAT: &str = "Extreme heat risk";
pub const HIGH_HEAT: &str = "High heat";
pub const HEAVY_RAIN: &str = "Heavy rain";
pub const STORM: &str = "Storm / high wind";
pub const FREEZING: &str = "Freezing conditions";
pub const HEAT_HUMIDITY: &str = "Heat + high humidity";

const EXTREME_HEAT_C: f64 = 38.0;
const HIGH_HEAT_C: f64 = 32.0;
const FREEZING_C: f64 = 0.0;
const HEAVY_RAIN_MM: f64 = 10.0;
const HIGH_WIND_KMH: f64 = 20.0;
const HUMID_HEAT_C: f64 = 30.0;
const HUMID_HEAT_RH: f64 = 70.0;

/// Heavy/freezing rain and heavy showers.
const HEAVY_RAIN_CODES: [i32; 6] = [65, 66, 67, 80, 81, 82];
/// Thunderstorm, with or without hail.
const STORM_CODES: [i32; 3] = [95, 96, 99];

const EXTREME_HEAT_PRECAUTIONS: [&str; 3] = [
    "Stay indoors and keep hydrated",
    "Avoid strenuous outdoor activities",
    "Check on elderly and vulnerable people",
];
const HIGH_HEAT_PRECAUTIONS: [&str; 2] = ["Drink water frequently", "Wear light, breathable clothing"];
const HEAVY_RAIN_PRECAUTIONS: [&str; 3] = [
    "Avoid driving through flooded areas",
    "Keep emergency kit ready",
    "Stay indoors if possible",
];
const STORM_PRECAUTIONS: [&str; 3] = [
    "Secure outdoor objects",
    "Stay away from trees and power lines",
    "Delay travel if possible",
];
const FREEZING_PRECAUTIONS: [&str; 2] = [
    "Wear layered, warm clothing",
    "Beware of ice on roads and pavements",
];
const HEAT_HUMIDITY_PRECAUTIONS: [&str; 1] = ["Use fans/AC and take cool showers"];

fn at_least(value: Option<f64>, threshold: f64) -> bool {
    matches!(value, Some(v) if v >= threshold)
}

fn at_most(value: Option<f64>, threshold: f64) -> bool {
    matches!(value, Some(v) if v <= threshold)
}

fn code_in(code: Option<i32>, codes: &[i32]) -> bool {
    code.is_some_and(|c| codes.contains(&c))
}

/// Map a reading to hazard labels and precautions.
pub fn evaluate_weather(reading: &WeatherReading) -> HazardAssessment {
    let t = reading.temperature_2m;
    let rh = reading.relative_humidity_2m;
    let code = reading.weather_code;

    let mut assessment = HazardAssessment::builder(AssessmentSource::Weather);

    if at_least(t, EXTREME_HEAT_C) {
        assessment = assessment
            .hazard(EXTREME_HEAT)
            .precautions(EXTREME_HEAT_PRECAUTIONS);
    } else if at_least(t, HIGH_HEAT_C) {
        assessment = assessment.hazard(HIGH_HEAT).precautions(HIGH_HEAT_PRECAUTIONS);
    }

    if at_least(reading.precipitation, HEAVY_RAIN_MM) || code_in(code, &HEAVY_RAIN_CODES) {
        assessment = assessment.hazard(HEAVY_RAIN).precautions(HEAVY_RAIN_PRECAUTIONS);
    }

    if at_least(reading.wind_speed_10m, HIGH_WIND_KMH) || code_in(code, &STORM_CODES) {
        assessment = assessment.hazard(STORM).precautions(STORM_PRECAUTIONS);
    }

    if at_most(t, FREEZING_C) {
        assessment = assessment.hazard(FREEZING).precautions(FREEZING_PRECAUTIONS);
    }

    if at_least(t, HUMID_HEAT_C) && at_least(rh, HUMID_HEAT_RH) {
        assessment = assessment
            .hazard(HEAT_HUMIDITY)
            .precautions(HEAT_HUMIDITY_PRECAUTIONS);
    }

    let assessment = assessment.build();
    if !assessment.is_clear() {
        tracing::debug!(hazards = ?assessment.hazards(), "Weather hazards detected");
    }
    assessment
}
