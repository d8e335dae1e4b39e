//! REST Countries v2 client.
//!
//! One GET to `{base_url}/all` returning the full collection as a JSON
//! array. No authentication and no timeout; a hung request simply never
//! resolves and the UI keeps its empty collection.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::{Country, CountrySource, SourceError};

/// Public endpoint of the REST Countries v2 API.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";

/// HTTP source backed by the public REST Countries API.
pub struct RestCountriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    /// Creates a new source.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public
    ///   endpoint; tests point this at a mock server)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let url = format!("{}/all", self.base_url);
        info!("Fetching country collection from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Country endpoint status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country endpoint error: {} - {}", status, message);
            return Err(SourceError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let countries: Vec<Country> =
            serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))?;

        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }
}
