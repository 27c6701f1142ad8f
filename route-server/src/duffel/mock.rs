//! Mock Duffel client for running without API access.
//!
//! Loads sample offer responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::AirportCode;

use super::error::DuffelError;
use super::types::{OfferResponse, OfferSearchRequest, RawOffer};

/// Mock client that serves offers from memory.
///
/// Pairs with no data return an empty list, the same as an upstream with
/// no availability.
#[derive(Debug, Clone, Default)]
pub struct MockDuffelClient {
    offers: HashMap<(AirportCode, AirportCode), Vec<RawOffer>>,
}

impl MockDuffelClient {
    /// An empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load offer files from a directory.
    ///
    /// Expects files named `{ORIGIN}-{DEST}.json` (e.g. `BOS-JFK.json`),
    /// each holding a bare offer array or an offer request envelope.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, DuffelError> {
        let data_dir = data_dir.as_ref();
        let mut mock = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DuffelError::Fixture(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| DuffelError::Fixture(format!("failed to read entry: {e}")))?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let (origin, destination) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(parse_pair)
                .ok_or_else(|| {
                    DuffelError::Fixture(format!("invalid filename: {}", path.display()))
                })?;

            let json = std::fs::read_to_string(&path).map_err(|e| {
                DuffelError::Fixture(format!("failed to read {}: {e}", path.display()))
            })?;
            let response: OfferResponse = serde_json::from_str(&json).map_err(|e| {
                DuffelError::Fixture(format!("failed to parse {}: {e}", path.display()))
            })?;

            mock.offers
                .insert((origin, destination), response.into_offers());
        }

        if mock.offers.is_empty() {
            return Err(DuffelError::Fixture(format!(
                "no offer files found in {}",
                data_dir.display()
            )));
        }

        Ok(mock)
    }

    /// Add or replace the offers for one pair.
    pub fn with_pair(
        mut self,
        origin: AirportCode,
        destination: AirportCode,
        offers: Vec<RawOffer>,
    ) -> Self {
        self.offers.insert((origin, destination), offers);
        self
    }

    /// Mimics [`DuffelClient::search_offers`](super::DuffelClient::search_offers).
    /// The date is ignored; mock data is static.
    pub fn search_offers(&self, request: &OfferSearchRequest) -> Vec<RawOffer> {
        self.offers
            .get(&(request.origin, request.destination))
            .cloned()
            .unwrap_or_default()
    }

    /// Pairs with loaded data, sorted.
    pub fn pairs(&self) -> Vec<(AirportCode, AirportCode)> {
        let mut pairs: Vec<_> = self.offers.keys().copied().collect();
        pairs.sort();
        pairs
    }
}

/// "BOS-JFK" -> (BOS, JFK)
fn parse_pair(stem: &str) -> Option<(AirportCode, AirportCode)> {
    let (origin, destination) = stem.split_once('-')?;
    Some((
        AirportCode::parse_normalized(origin).ok()?,
        AirportCode::parse_normalized(destination).ok()?,
    ))
}
