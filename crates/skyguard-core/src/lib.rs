//! Shared building blocks for SkyGuard.
//!
//! Holds the hazard assessment model and its merge step, the configuration
//! file, the application error taxonomy, and logging setup.

pub mod assessment;
pub mod config;
pub mod error;

pub use assessment::{
    merge_assessments, AssessmentBuilder, AssessmentSource, HazardAssessment, MergedAlerts,
};
pub use config::{
    Config, EndpointConfig, LocationConfig, NotificationConfig, SearchConfig, ValidationResult,
};
pub use error::{
    AppError, ConfigError, HealthError, LocationError, NetworkError, ReqwestErrorExt, WeatherError,
};

use anyhow::Result;

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("SkyGuard core initialized");
    Ok(())
}
