//! Google Places Autocomplete client.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::domain::Location;

use super::error::PlacesError;

/// Default base URL for the Places API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Inputs shorter than this are not sent to the provider.
pub const MIN_INPUT_CHARS: usize = 3;

/// Autocomplete response envelope.
#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Option<Vec<Prediction>>,
    status: String,
    error_message: Option<String>,
}

/// One suggested place.
#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
}

/// Configuration for the Places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Client for address autocomplete.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    /// Create a new Places client.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// Candidate locations for free-text input, most relevant first.
    ///
    /// Input under [`MIN_INPUT_CHARS`] characters returns an empty list
    /// without calling the provider.
    pub async fn autocomplete(&self, input: &str) -> Result<Vec<Location>, PlacesError> {
        let input = input.trim();
        if input.chars().count() < MIN_INPUT_CHARS {
            return Ok(Vec::new());
        }

        let url = format!("{}/autocomplete/json", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("input", input), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: AutocompleteResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Json {
                message: e.to_string(),
            })?;

        match parsed.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            _ => {
                return Err(PlacesError::Api {
                    status: parsed.status,
                    message: parsed.error_message.unwrap_or_default(),
                });
            }
        }

        let locations: Vec<Location> = parsed
            .predictions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| match Location::new(p.place_id, p.description) {
                Ok(location) => Some(location),
                Err(e) => {
                    trace!(error = %e, "Skipping prediction");
                    None
                }
            })
            .collect();

        debug!(count = locations.len(), "Autocomplete predictions");
        Ok(locations)
    }
}
