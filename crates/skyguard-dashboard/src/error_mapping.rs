//! Maps dashboard errors to skyguard_core::AppError for consistent panel messages.

use skyguard_core::{AppError, HealthError as CoreHealthError, ReqwestErrorExt, WeatherError as CoreWeatherError};
use skyguard_health::HealthError;
use skyguard_weather::WeatherError;

use crate::error::DashboardError;

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Forecast(WeatherError::Network(e))
            | DashboardError::PlaceLookup(WeatherError::Network(e))
            | DashboardError::Search(WeatherError::Network(e)) => {
                AppError::Network(e.into_network_error())
            }
            DashboardError::Forecast(e) => {
                AppError::Weather(CoreWeatherError::ForecastFailed(e.to_string()))
            }
            DashboardError::PlaceLookup(e) => {
                AppError::Weather(CoreWeatherError::PlaceLookupFailed(e.to_string()))
            }
            DashboardError::Search(e) => {
                AppError::Weather(CoreWeatherError::SearchFailed(e.to_string()))
            }
            DashboardError::Health(HealthError::Network(e)) => {
                AppError::Network(e.into_network_error())
            }
            DashboardError::Health(HealthError::CountryNotFound(code)) => {
                AppError::Health(CoreHealthError::CountryNotFound(code))
            }
            DashboardError::Health(e) => AppError::Health(CoreHealthError::FetchFailed(e.to_string())),
            DashboardError::Location(e) => AppError::Location(e),
        }
    }
}
