//! Failures of a dashboard operation, tagged with the step that failed.

use skyguard_core::LocationError;
use skyguard_health::HealthError;
use skyguard_weather::WeatherError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Forecast failed: {0}")]
    Forecast(#[source] WeatherError),

    #[error("Place lookup failed: {0}")]
    PlaceLookup(#[source] WeatherError),

    #[error("Place search failed: {0}")]
    Search(#[source] WeatherError),

    #[error("Health lookup failed: {0}")]
    Health(#[from] HealthError),

    #[error(transparent)]
    Location(#[from] LocationError),
}
