//! Device location contract and the persisted last-known location.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use skyguard_core::{LocationConfig, LocationError};

use crate::types::{Coordinates, WeatherError};

/// Options handed to the location service. The service, not the caller,
/// enforces the timeout and maximum age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the service may return
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

impl From<&LocationConfig> for PositionOptions {
    fn from(config: &LocationConfig) -> Self {
        Self {
            high_accuracy: config.high_accuracy,
            timeout: Duration::from_secs(config.timeout_secs),
            maximum_age: Duration::from_secs(config.maximum_age_secs),
        }
    }
}

/// A source of the device's current position.
///
/// Returns a single coordinate pair, or the reason none is available.
pub trait LocationProvider: Send + Sync {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Reports a fixed position from configuration, or that geolocation is
/// unsupported when none is configured.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    fixed: Option<Coordinates>,
}

impl ConfiguredLocation {
    pub fn new(fixed: Option<Coordinates>) -> Self {
        Self { fixed }
    }

    pub fn from_config(config: &LocationConfig) -> Self {
        let fixed = match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => match Coordinates::new(lat, lon) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!("Ignoring configured location: {}", e);
                    None
                }
            },
            _ => None,
        };
        Self { fixed }
    }
}

impl LocationProvider for ConfiguredLocation {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Coordinates, LocationError> {
        self.fixed.ok_or(LocationError::Unsupported)
    }
}

/// Single persisted slot holding the last accepted coordinates.
#[derive(Debug, Clone)]
pub struct LocationStore {
    path: PathBuf,
}

impl LocationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached coordinates. A missing, unreadable or out-of-range
    /// entry reads as no cached location.
    pub fn load(&self) -> Option<Coordinates> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read cached location: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Coordinates>(&contents) {
            Ok(coords) if coords.is_valid() => Some(coords),
            Ok(coords) => {
                tracing::warn!("Cached location out of range: {:?}", coords);
                None
            }
            Err(e) => {
                tracing::warn!("Cached location is corrupt: {}", e);
                None
            }
        }
    }

    /// Overwrite the slot.
    pub fn save(&self, coords: Coordinates) -> Result<(), WeatherError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WeatherError::Cache(e.to_string()))?;
        }
        let json = serde_json::to_string(&coords).map_err(|e| WeatherError::Cache(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| WeatherError::Cache(e.to_string()))?;
        tracing::debug!("Saved location to {}", self.path.display());
        Ok(())
    }
}
