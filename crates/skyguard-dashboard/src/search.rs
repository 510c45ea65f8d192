//! Search-as-you-type over the forward geocoding endpoint.

use std::sync::Arc;
use std::time::Duration;

use skyguard_core::{AppError, SearchConfig};
use skyguard_weather::{PlaceCandidate, SearchQuery, WeatherReading};

use crate::error::DashboardError;
use crate::generation::FetchGeneration;
use crate::sources::DataSources;

/// Shorter queries return no candidates without a request.
pub const MIN_QUERY_CHARS: usize = 2;

pub struct PlaceSearch<S> {
    sources: Arc<S>,
    country_code: String,
    count: u32,
    language: String,
    debounce: Duration,
    generation: FetchGeneration,
}

impl<S: DataSources> PlaceSearch<S> {
    pub fn new(sources: Arc<S>, config: &SearchConfig) -> Self {
        Self {
            sources,
            country_code: config.country_code.clone(),
            count: config.result_count,
            language: config.language.clone(),
            debounce: Duration::from_millis(config.debounce_ms),
            generation: FetchGeneration::new(),
        }
    }

    /// Debounced search. Returns `None` when a later call superseded this
    /// one, either during the quiet period or while the request was in
    /// flight.
    pub async fn query(&self, text: &str) -> Option<Result<Vec<PlaceCandidate>, AppError>> {
        let ticket = self.generation.begin();
        tokio::time::sleep(self.debounce).await;
        if !self.generation.is_current(ticket) {
            return None;
        }

        let name = text.trim();
        if name.chars().count() < MIN_QUERY_CHARS {
            return Some(Ok(Vec::new()));
        }

        let query = SearchQuery {
            name: name.to_string(),
            country_code: self.country_code.clone(),
            count: self.count,
            language: self.language.clone(),
        };
        let result = self.sources.search_places(&query).await;

        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "Dropping superseded search results for '{}'", name);
            return None;
        }

        Some(result.map_err(|e| DashboardError::Search(e).into()))
    }

    /// Current conditions for a chosen candidate. Display only; no hazards
    /// are evaluated for searched places.
    pub async fn weather_for(&self, candidate: &PlaceCandidate) -> Result<WeatherReading, AppError> {
        let coords = candidate.coordinates().map_err(|e| {
            AppError::Weather(skyguard_core::WeatherError::InvalidPlace(e.to_string()))
        })?;
        self.sources
            .forecast(coords)
            .await
            .map_err(|e| DashboardError::Forecast(e).into())
    }
}
