//! The upstream data the dashboard depends on.

use std::future::Future;

use skyguard_core::Config;
use skyguard_health::{DiseaseClient, DiseaseSnapshot, HealthError};
use skyguard_weather::{
    Coordinates, ForecastProvider, GeocodeClient, Place, PlaceCandidate, SearchQuery, WeatherError,
    WeatherReading,
};

use crate::error::DashboardError;

/// Every remote lookup the dashboard performs.
pub trait DataSources: Send + Sync {
    fn forecast(
        &self,
        coords: Coordinates,
    ) -> impl Future<Output = Result<WeatherReading, WeatherError>> + Send;

    /// `Ok(None)` when no place matches the coordinates.
    fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> impl Future<Output = Result<Option<Place>, WeatherError>> + Send;

    fn search_places(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<PlaceCandidate>, WeatherError>> + Send;

    fn disease(
        &self,
        country_code: &str,
    ) -> impl Future<Output = Result<DiseaseSnapshot, HealthError>> + Send;
}

/// Open-Meteo and disease.sh over HTTP.
pub struct HttpSources {
    forecast: ForecastProvider,
    geocoder: GeocodeClient,
    disease: DiseaseClient,
}

impl HttpSources {
    pub fn new(forecast: ForecastProvider, geocoder: GeocodeClient, disease: DiseaseClient) -> Self {
        Self {
            forecast,
            geocoder,
            disease,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, DashboardError> {
        Ok(Self::new(
            ForecastProvider::new(config.endpoints.forecast_url.clone())
                .map_err(DashboardError::Forecast)?,
            GeocodeClient::new(
                config.endpoints.geocoding_url.clone(),
                config.search.language.clone(),
            )
            .map_err(DashboardError::PlaceLookup)?,
            DiseaseClient::new(config.endpoints.disease_url.clone())?,
        ))
    }
}

impl DataSources for HttpSources {
    async fn forecast(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        self.forecast.fetch_current(coords).await
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Result<Option<Place>, WeatherError> {
        self.geocoder.reverse(coords).await
    }

    async fn search_places(&self, query: &SearchQuery) -> Result<Vec<PlaceCandidate>, WeatherError> {
        self.geocoder.search(query).await
    }

    async fn disease(&self, country_code: &str) -> Result<DiseaseSnapshot, HealthError> {
        self.disease.country(country_code).await
    }
}
