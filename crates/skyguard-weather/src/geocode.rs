//! Geocoding: coordinates to place names and free-text place search.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use crate::provider::{decode, USER_AGENT};
use crate::types::{Coordinates, Place, PlaceCandidate, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<PlaceCandidate>,
}

/// Parameters for a forward search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub name: String,
    /// Only candidates in this country are returned
    pub country_code: String,
    pub count: u32,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Arc<Client>,
    base_url: String,
    language: String,
}

impl GeocodeClient {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
        })
    }

    /// Best match for a coordinate pair. `Ok(None)` means the place is
    /// unresolved, which is not an error.
    #[instrument(skip(self), level = "info")]
    pub async fn reverse(&self, coords: Coordinates) -> Result<Option<Place>, WeatherError> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coords.lat().to_string()),
                ("longitude", coords.lon().to_string()),
                ("language", self.language.clone()),
            ])
            .send()
            .await?;

        let body: ReverseResponse = decode(response, "reverse geocoding").await?;
        let place = body.results.into_iter().next();

        match &place {
            Some(p) => tracing::info!("Reverse geocoded to: {}", p.title()),
            None => tracing::info!("No place found for {}, {}", coords.lat(), coords.lon()),
        }
        Ok(place)
    }

    /// Ranked candidates for a free-text name, restricted to one country.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<PlaceCandidate>, WeatherError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", query.name.trim().to_string()),
                ("country", query.country_code.clone()),
                ("count", query.count.to_string()),
                ("language", query.language.clone()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        let body: SearchResponse = decode(response, "place search").await?;

        // The country parameter is a ranking hint upstream, not a filter.
        let candidates: Vec<PlaceCandidate> = body
            .results
            .into_iter()
            .filter(|c| {
                c.country_code
                    .as_deref()
                    .is_some_and(|code| code.eq_ignore_ascii_case(&query.country_code))
            })
            .collect();

        tracing::debug!("Search '{}' matched {} places", query.name, candidates.len());
        Ok(candidates)
    }
}
