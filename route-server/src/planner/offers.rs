//! Flight offers for one airport pair.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::{AirportCode, FlightOffer, SearchObjective};
use crate::duffel::{DuffelClient, DuffelError, MockDuffelClient, OfferSearchRequest, RawOffer, convert_offers};

use super::rank::rank_offers;

/// Source of raw provider offers.
///
/// This abstraction allows the planner to be tested with in-memory data
/// and lets a cache sit in front of the live client.
pub trait OfferProvider: Send + Sync {
    fn fetch_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> impl Future<Output = Result<Arc<Vec<RawOffer>>, DuffelError>> + Send;
}

impl OfferProvider for DuffelClient {
    async fn fetch_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Arc<Vec<RawOffer>>, DuffelError> {
        self.search_offers(request).await.map(Arc::new)
    }
}

impl OfferProvider for MockDuffelClient {
    async fn fetch_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Arc<Vec<RawOffer>>, DuffelError> {
        Ok(Arc::new(self.search_offers(request)))
    }
}

/// Retrieves, normalizes and ranks the offers for a pair.
pub struct FlightOfferService<'a, P: OfferProvider> {
    provider: &'a P,
    limit: usize,
}

impl<'a, P: OfferProvider> FlightOfferService<'a, P> {
    /// `limit` is the number of offers kept per pair.
    pub fn new(provider: &'a P, limit: usize) -> Self {
        Self { provider, limit }
    }

    /// Best offers for a pair and date, at most `limit`.
    ///
    /// Provider failures are logged and yield no offers; a pair without
    /// service is expected, not exceptional.
    pub async fn search(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        date: NaiveDate,
        objective: SearchObjective,
    ) -> Vec<FlightOffer> {
        let request = OfferSearchRequest::one_adult(origin, destination, date);

        let raw = match self.provider.fetch_offers(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(origin = %origin, destination = %destination, error = %e, "Offer retrieval failed");
                return Vec::new();
            }
        };

        let offers = convert_offers(&raw);
        debug!(
            origin = %origin,
            destination = %destination,
            raw = raw.len(),
            converted = offers.len(),
            "Offers retrieved"
        );

        rank_offers(offers, objective, self.limit)
    }
}
