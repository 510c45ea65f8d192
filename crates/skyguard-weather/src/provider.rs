use crate::types::{Coordinates, WeatherError, WeatherReading};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub(crate) const USER_AGENT: &str = concat!("SkyGuard/", env!("CARGO_PKG_VERSION"));

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<WeatherReading>,
}

/// Client for the Open-Meteo forecast endpoint.
///
/// Wind speed is requested in the API's default km/h, which is the unit the
/// hazard thresholds assume.
#[derive(Debug, Clone)]
pub struct ForecastProvider {
    client: Arc<Client>,
    base_url: String,
}

impl ForecastProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
        })
    }

    /// Fetch current conditions for a coordinate pair.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coords.lat().to_string()),
                ("longitude", coords.lon().to_string()),
                ("timezone", "auto".to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let body: ForecastResponse = decode(response, "forecast").await?;
        let reading = body.current.unwrap_or_default();
        tracing::debug!(?reading, "Current conditions received");
        Ok(reading)
    }
}

/// Check the status and decode a JSON body.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T, WeatherError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} returned status {}", endpoint, status);
        return Err(WeatherError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| WeatherError::Parse(format!("{}: {}", endpoint, e)))
}
