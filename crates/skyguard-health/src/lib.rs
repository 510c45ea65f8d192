//! Regional health advisories for SkyGuard.
//!
//! Fetches COVID-19 figures from disease.sh, turns the daily incidence rate
//! into an optional hazard assessment, and carries the static guidance the
//! health panel always shows.

pub mod assess;
pub mod client;
pub mod error;
pub mod guidance;
pub mod types;

pub use assess::{evaluate_health, incidence_rate, ALERT_RATE_PER_MILLION};
pub use client::DiseaseClient;
pub use error::HealthError;
pub use guidance::CovidGuidance;
pub use types::DiseaseSnapshot;
