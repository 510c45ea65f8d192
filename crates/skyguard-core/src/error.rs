//! Centralized error types for SkyGuard.
//!
//! Each crate reports failures with its own error enum; the dashboard maps
//! those into [`AppError`] so every panel can show a short, actionable
//! message while the full error goes to the log.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for a panel.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Health service error: {0}")]
    Health(#[from] HealthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Health(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "Something went wrong",
        }
    }

    /// Whether the user can recover by retrying the same action.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network(_) | AppError::Weather(_) | AppError::Health(_) => true,
            AppError::Location(e) => !matches!(e, LocationError::Unsupported),
            AppError::Config(_) | AppError::Io(_) | AppError::Other(_) => false,
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Location permission and lookup failures. Always recoverable by the user.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Geolocation is not supported on this device")]
    Unsupported,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => "Location access denied",
            LocationError::Unsupported => "Geolocation is not supported on this device.",
            LocationError::Timeout => "Timed out while locating you. Please try again.",
            LocationError::Unavailable(_) => "Unable to access your location.",
        }
    }
}

/// Weather panel errors, as seen by the application.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Forecast request failed: {0}")]
    ForecastFailed(String),

    #[error("Place lookup failed: {0}")]
    PlaceLookupFailed(String),

    #[error("Place search failed: {0}")]
    SearchFailed(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Place has invalid coordinates: {0}")]
    InvalidPlace(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ForecastFailed(_) => "Failed to fetch weather",
            WeatherError::PlaceLookupFailed(_) => "Failed to resolve place",
            WeatherError::SearchFailed(_) => "Failed to search locations",
            WeatherError::InvalidCoordinates(_) => "The saved location is invalid. Enable location again.",
            WeatherError::InvalidPlace(_) => "This place has no usable coordinates. Pick another result.",
        }
    }
}

/// Health panel errors, as seen by the application.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Health data request failed: {0}")]
    FetchFailed(String),

    #[error("No health data for country: {0}")]
    CountryNotFound(String),
}

impl HealthError {
    pub fn user_message(&self) -> &'static str {
        match self {
            HealthError::FetchFailed(_) => "Failed to fetch health data",
            HealthError::CountryNotFound(_) => "No health data is available for your country.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
