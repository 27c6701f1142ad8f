//! End-to-end itinerary search.
//!
//! Resolves candidate airports for both endpoints, aggregates itineraries
//! over the airport pairs and ranks the result.

use chrono::NaiveDate;
use tracing::info;

use crate::airports::AirportFinder;
use crate::domain::{Itinerary, Location, SearchObjective};
use crate::ground::GroundTransportEstimator;

use super::aggregate::{Aggregation, ItineraryAggregator, PairOutcome};
use super::config::SearchConfig;
use super::offers::OfferProvider;
use super::rank::rank_itineraries;

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: Location,
    pub destination: Location,
    /// Departure date. `None` means today.
    pub date: Option<NaiveDate>,
    pub objective: SearchObjective,
}

impl SearchRequest {
    /// Create a new search request for today.
    pub fn new(origin: Location, destination: Location, objective: SearchObjective) -> Self {
        Self {
            origin,
            destination,
            date: None,
            objective,
        }
    }

    /// Set the departure date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin.place_id() == self.destination.place_id()
            && !self.origin.place_id().is_empty()
        {
            return Err(SearchError::InvalidRequest(
                "origin and destination are the same place".to_string(),
            ));
        }
        Ok(())
    }

    /// The departure date, defaulting to today (local).
    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found itineraries, ranked best-first.
    pub itineraries: Vec<Itinerary>,

    /// Airport pairs explored.
    pub pairs_explored: usize,

    /// Itineraries built before ranking and truncation.
    pub itineraries_considered: usize,
}

/// Door-to-door itinerary planner.
pub struct Planner<'a, F, G, P>
where
    F: AirportFinder,
    G: GroundTransportEstimator,
    P: OfferProvider,
{
    finder: &'a F,
    ground: &'a G,
    provider: &'a P,
    config: &'a SearchConfig,
}

impl<'a, F, G, P> Planner<'a, F, G, P>
where
    F: AirportFinder,
    G: GroundTransportEstimator,
    P: OfferProvider,
{
    /// Create a new planner.
    pub fn new(finder: &'a F, ground: &'a G, provider: &'a P, config: &'a SearchConfig) -> Self {
        Self {
            finder,
            ground,
            provider,
            config,
        }
    }

    /// Search for itineraries between two locations.
    ///
    /// Only an invalid request is an error. No airports with service, no
    /// offers and provider failures all produce an empty result.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let date = request.date_or_today();
        let origin_airports = self.finder.find(&request.origin);
        let destination_airports = self.finder.find(&request.destination);

        let aggregator = ItineraryAggregator::new(self.ground, self.provider, self.config);
        let Aggregation { itineraries, pairs } = aggregator
            .aggregate(
                &request.origin,
                &request.destination,
                &origin_airports,
                &destination_airports,
                date,
                request.objective,
            )
            .await;

        let considered = itineraries.len();
        let skipped = pairs
            .iter()
            .filter(|(_, _, outcome)| !matches!(outcome, PairOutcome::Priced(_)))
            .count();
        let ranked = rank_itineraries(itineraries, request.objective, self.config.max_results);

        info!(
            origin = request.origin.description(),
            destination = request.destination.description(),
            %date,
            objective = %request.objective,
            pairs = pairs.len(),
            skipped,
            considered,
            returned = ranked.len(),
            "Search complete"
        );

        Ok(SearchResult {
            itineraries: ranked,
            pairs_explored: pairs.len(),
            itineraries_considered: considered,
        })
    }
}
