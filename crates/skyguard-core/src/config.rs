use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml and the cached location
    pub config_dir: PathBuf,

    /// Upstream API base URLs
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Place search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Device location settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Desktop notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Open-Meteo forecast endpoint
    pub forecast_url: String,
    /// Open-Meteo geocoding API root (`/reverse` and `/search` are appended)
    pub geocoding_url: String,
    /// disease.sh COVID-19 API root (`/countries/{code}` is appended)
    pub disease_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            geocoding_url: "https://geocoding-api.open-meteo.com/v1".to_string(),
            disease_url: "https://disease.sh/v3/covid-19".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// ISO country code results are restricted to
    #[serde(default = "default_search_country")]
    pub country_code: String,
    /// Maximum number of candidates requested
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    #[serde(default = "default_language")]
    pub language: String,
    /// Quiet period before a typed query is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_search_country() -> String {
    "IN".to_string()
}

fn default_result_count() -> u32 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_debounce_ms() -> u64 {
    350
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            country_code: default_search_country(),
            result_count: default_result_count(),
            language: default_language(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Give up on the device fix after this long
    pub timeout_secs: u64,
    /// Accept a device fix at most this old
    pub maximum_age_secs: u64,
    pub high_accuracy: bool,
    /// Fixed position reported when no device location service exists
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            maximum_age_secs: 60,
            high_accuracy: true,
            latitude: None,
            longitude: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skyguard");

        Self {
            config_dir,
            endpoints: EndpointConfig::default(),
            search: SearchConfig::default(),
            location: LocationConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating a default
    /// file if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating a default file
    /// there if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors fail the load.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.endpoints.forecast_url,
            "endpoints.forecast_url",
            &mut result,
        );
        self.validate_url(
            &self.endpoints.geocoding_url,
            "endpoints.geocoding_url",
            &mut result,
        );
        self.validate_url(
            &self.endpoints.disease_url,
            "endpoints.disease_url",
            &mut result,
        );

        let code = &self.search.country_code;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            result.add_error(
                "search.country_code",
                format!("Expected a two-letter country code, got: {}", code),
            );
        }

        if self.search.result_count == 0 {
            result.add_error("search.result_count", "Result count must be greater than 0");
        } else if self.search.result_count > 100 {
            result.add_warning(
                "search.result_count",
                "The geocoding API returns at most 100 results",
            );
        }

        if self.location.timeout_secs == 0 {
            result.add_error("location.timeout_secs", "Timeout must be greater than 0");
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    result.add_error("location.latitude", "Latitude must be within [-90, 90]");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    result.add_error("location.longitude", "Longitude must be within [-180, 180]");
                }
            }
            (None, None) => {}
            _ => result.add_warning(
                "location",
                "Both latitude and longitude are needed; the fixed location is ignored",
            ),
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the persisted location slot
    pub fn location_cache_path(&self) -> PathBuf {
        self.config_dir.join("user_coords.json")
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skyguard");

        Ok(config_dir.join("config.toml"))
    }
}
