//! Duffel HTTP client.
//!
//! Handles bearer authentication and concurrency limiting. The proxy
//! endpoint uses [`DuffelClient::forward_offer_request`], which relays the
//! upstream status untouched; the planner uses [`DuffelClient::search_offers`].

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use super::error::DuffelError;
use super::types::{OfferResponse, OfferSearchRequest, RawOffer};

/// Default base URL for the Duffel API.
pub const DEFAULT_BASE_URL: &str = "https://api.duffel.com";

/// API version header value.
const DEFAULT_API_VERSION: &str = "v2";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Path of the offer request endpoint.
const OFFER_REQUESTS_PATH: &str = "/air/offer_requests";

/// How much of an unparseable body to keep in errors.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Duffel client.
#[derive(Debug, Clone)]
pub struct DuffelConfig {
    /// Bearer token
    pub api_key: String,
    /// Base URL for the API (defaults to production Duffel)
    pub base_url: String,
    /// Value of the `Duffel-Version` header
    pub api_version: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DuffelConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Status and JSON body of an upstream response, relayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Duffel API client.
#[derive(Debug, Clone)]
pub struct DuffelClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl DuffelClient {
    /// Create a new Duffel client with the given configuration.
    pub fn new(config: DuffelConfig) -> Result<Self, DuffelError> {
        if config.api_key.trim().is_empty() {
            return Err(DuffelError::NotConfigured("empty API key".to_string()));
        }

        let mut headers = HeaderMap::new();

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| DuffelError::NotConfigured("invalid API key format".to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let version = HeaderValue::from_str(&config.api_version)
            .map_err(|_| DuffelError::NotConfigured("invalid API version".to_string()))?;
        headers.insert(HeaderName::from_static("duffel-version"), version);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Post a JSON body to the offer request endpoint, byte for byte.
    ///
    /// Any HTTP status is a successful reply; only transport failures and
    /// non-JSON replies are errors.
    pub async fn forward_offer_request(
        &self,
        body: impl Into<reqwest::Body>,
    ) -> Result<UpstreamReply, DuffelError> {
        let _permit = self.acquire().await?;

        let url = format!("{}{}", self.base_url, OFFER_REQUESTS_PATH);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(status, bytes = text.len(), "Offer request relayed");

        let body = serde_json::from_str(&text).map_err(|e| DuffelError::Json {
            message: e.to_string(),
            body: Some(text.chars().take(BODY_SNIPPET_CHARS).collect()),
        })?;

        Ok(UpstreamReply { status, body })
    }

    /// Search offers for one airport pair.
    pub async fn search_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Vec<RawOffer>, DuffelError> {
        let body = serde_json::to_vec(request).map_err(|e| DuffelError::Json {
            message: e.to_string(),
            body: None,
        })?;

        let reply = self.forward_offer_request(body).await?;

        if !(200..300).contains(&reply.status) {
            return Err(DuffelError::Api {
                status: reply.status,
                body: reply.body.to_string(),
            });
        }

        let offers: OfferResponse =
            serde_json::from_value(reply.body).map_err(|e| DuffelError::Json {
                message: e.to_string(),
                body: None,
            })?;

        Ok(offers.into_offers())
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, DuffelError> {
        self.semaphore.acquire().await.map_err(|_| DuffelError::Api {
            status: 0,
            body: "semaphore closed".to_string(),
        })
    }
}
