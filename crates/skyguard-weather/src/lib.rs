//! Weather side of SkyGuard
//!
//! Current conditions from Open-Meteo, reverse and forward geocoding, the
//! device location contract with its cached slot, and the weather hazard
//! rules.

pub mod geocode;
pub mod hazards;
pub mod location;
pub mod provider;
pub mod types;

pub use geocode::{GeocodeClient, SearchQuery};
pub use hazards::evaluate_weather;
pub use location::{ConfiguredLocation, LocationProvider, LocationStore, PositionOptions};
pub use provider::ForecastProvider;
pub use types::*;
