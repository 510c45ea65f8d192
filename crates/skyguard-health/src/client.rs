//! disease.sh COVID-19 API client.

use std::sync::Arc;

use reqwest::Client;
use tracing::instrument;

use crate::error::HealthError;
use crate::types::DiseaseSnapshot;

pub const DEFAULT_DISEASE_URL: &str = "https://disease.sh/v3/covid-19";
const USER_AGENT: &str = concat!("SkyGuard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DiseaseClient {
    client: Arc<Client>,
    base_url: String,
}

impl DiseaseClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, HealthError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Latest snapshot for an ISO country code, matched strictly.
    #[instrument(skip(self), level = "info")]
    pub async fn country(&self, country_code: &str) -> Result<DiseaseSnapshot, HealthError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| HealthError::Parse(format!("base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| HealthError::Parse(format!("base url cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["countries", country_code]);
        url.query_pairs_mut().append_pair("strict", "true");

        let response = self.client.get(url).send().await?;
        self.handle_response(response, country_code).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
        country_code: &str,
    ) -> Result<DiseaseSnapshot, HealthError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| HealthError::Parse(format!("JSON parse error: {}", e)))
        } else if status.as_u16() == 404 {
            Err(HealthError::CountryNotFound(country_code.to_string()))
        } else {
            Err(HealthError::Status(status.as_u16()))
        }
    }
}
