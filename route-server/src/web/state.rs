//! Application state for the web layer.

use std::sync::Arc;

use crate::airports::KeywordAirportFinder;
use crate::cache::CachedOfferProvider;
use crate::duffel::{DuffelClient, DuffelError, MockDuffelClient, OfferSearchRequest, RawOffer};
use crate::ground::{FallbackEstimator, FareTable};
use crate::places::PlacesClient;
use crate::planner::{OfferProvider, SearchConfig};

/// Where searches get their flight offers.
pub enum OfferBackend {
    /// Live Duffel API behind the response cache
    Live(CachedOfferProvider<DuffelClient>),
    /// Fixture files
    Mock(MockDuffelClient),
    /// No credential; every pair has no offers
    Unconfigured,
}

impl OfferProvider for OfferBackend {
    async fn fetch_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Arc<Vec<RawOffer>>, DuffelError> {
        match self {
            OfferBackend::Live(provider) => provider.fetch_offers(request).await,
            OfferBackend::Mock(mock) => mock.fetch_offers(request).await,
            OfferBackend::Unconfigured => Err(DuffelError::NotConfigured(
                "DUFFEL_API_KEY not set".to_string(),
            )),
        }
    }
}

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Candidate airports for a location
    pub finder: Arc<KeywordAirportFinder>,

    /// Ground leg estimates
    pub ground: Arc<FallbackEstimator<FareTable>>,

    /// Flight offers for searches
    pub offers: Arc<OfferBackend>,

    /// Raw client for the proxy endpoint; `None` without a credential
    pub duffel: Option<Arc<DuffelClient>>,

    /// Address autocomplete; `None` without a credential
    pub places: Option<Arc<PlacesClient>>,

    /// Planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state with no proxy or autocomplete provider.
    pub fn new(
        finder: KeywordAirportFinder,
        ground: FallbackEstimator<FareTable>,
        offers: OfferBackend,
        config: SearchConfig,
    ) -> Self {
        Self {
            finder: Arc::new(finder),
            ground: Arc::new(ground),
            offers: Arc::new(offers),
            duffel: None,
            places: None,
            config: Arc::new(config),
        }
    }

    /// Enable the proxy endpoint.
    pub fn with_duffel(mut self, client: DuffelClient) -> Self {
        self.duffel = Some(Arc::new(client));
        self
    }

    /// Enable address autocomplete.
    pub fn with_places(mut self, client: PlacesClient) -> Self {
        self.places = Some(Arc::new(client));
        self
    }
}
