//! Itinerary aggregation over airport pairs.
//!
//! Expands the origin × destination candidate cross product, prices each
//! pair (ground to, ground from, flights) and builds one itinerary per
//! offer. Pairs are independent: a pair that fails, times out or has no
//! offers contributes nothing and never affects its siblings.

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{AirportCode, Itinerary, Location, SearchObjective};
use crate::ground::{GroundError, GroundTransportEstimator};

use super::config::SearchConfig;
use super::offers::{FlightOfferService, OfferProvider};

/// What happened to one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// Pair was priced; may hold zero itineraries.
    Priced(usize),
    /// A ground estimate failed.
    GroundFailed,
    /// The pair ran past the pair timeout.
    TimedOut,
}

/// Result of aggregation.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Itineraries in insertion order: origin-major, destination-minor,
    /// then offer order.
    pub itineraries: Vec<Itinerary>,

    /// Pairs evaluated, with their outcomes, in the same order.
    pub pairs: Vec<(AirportCode, AirportCode, PairOutcome)>,
}

/// Builds itineraries for every airport pair.
pub struct ItineraryAggregator<'a, G: GroundTransportEstimator, P: OfferProvider> {
    ground: &'a G,
    offers: FlightOfferService<'a, P>,
    config: &'a SearchConfig,
}

impl<'a, G: GroundTransportEstimator, P: OfferProvider> ItineraryAggregator<'a, G, P> {
    pub fn new(ground: &'a G, provider: &'a P, config: &'a SearchConfig) -> Self {
        Self {
            ground,
            offers: FlightOfferService::new(provider, config.offers_per_pair),
            config,
        }
    }

    /// The pairs that will be explored: at most `max_candidates_per_side`
    /// airports from each side, origin-major.
    pub fn pairs(
        &self,
        origin_airports: &[AirportCode],
        destination_airports: &[AirportCode],
    ) -> Vec<(AirportCode, AirportCode)> {
        let cap = self.config.max_candidates_per_side;
        origin_airports
            .iter()
            .take(cap)
            .flat_map(|o| destination_airports.iter().take(cap).map(move |d| (*o, *d)))
            .collect()
    }

    /// Price every pair and collect the itineraries.
    ///
    /// Pairs run `max_concurrent_pairs` at a time; results are gathered in
    /// pair order regardless of completion order.
    pub async fn aggregate(
        &self,
        origin: &Location,
        destination: &Location,
        origin_airports: &[AirportCode],
        destination_airports: &[AirportCode],
        date: NaiveDate,
        objective: SearchObjective,
    ) -> Aggregation {
        let pairs = self.pairs(origin_airports, destination_airports);
        let mut result = Aggregation::default();

        for batch in pairs.chunks(self.config.max_concurrent_pairs.max(1)) {
            let futures: Vec<_> = batch
                .iter()
                .map(|&(o, d)| async move {
                    let priced = tokio::time::timeout(
                        self.config.pair_timeout(),
                        self.price_pair(origin, destination, o, d, date, objective),
                    )
                    .await;
                    (o, d, priced)
                })
                .collect();

            for (o, d, priced) in join_all(futures).await {
                let outcome = match priced {
                    Ok(Ok(itineraries)) => {
                        let n = itineraries.len();
                        result.itineraries.extend(itineraries);
                        PairOutcome::Priced(n)
                    }
                    Ok(Err(e)) => {
                        warn!(origin = %o, destination = %d, error = %e, "Skipping pair");
                        PairOutcome::GroundFailed
                    }
                    Err(_) => {
                        warn!(
                            origin = %o,
                            destination = %d,
                            timeout_ms = self.config.pair_timeout_ms,
                            "Pair timed out"
                        );
                        PairOutcome::TimedOut
                    }
                };
                result.pairs.push((o, d, outcome));
            }
        }

        result
    }

    /// Ground to `o`, ground from `d`, then the pair's offers.
    async fn price_pair(
        &self,
        origin: &Location,
        destination: &Location,
        o: AirportCode,
        d: AirportCode,
        date: NaiveDate,
        objective: SearchObjective,
    ) -> Result<Vec<Itinerary>, GroundError> {
        let ground_to = self.ground.estimate(origin, &o).await?;
        let ground_from = self.ground.estimate(destination, &d).await?;

        let offers = self.offers.search(o, d, date, objective).await;

        let itineraries: Vec<Itinerary> = offers
            .into_iter()
            .map(|flight| Itinerary::new(o, d, ground_to, flight, ground_from))
            .collect();

        debug!(
            origin = %o,
            destination = %d,
            itineraries = itineraries.len(),
            "Pair priced"
        );

        Ok(itineraries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duffel::MockDuffelClient;
    use crate::ground::default_fare_table;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn codes(list: &[&str]) -> Vec<AirportCode> {
        list.iter().map(|s| code(s)).collect()
    }

    #[test]
    fn pairs_are_capped_and_ordered() {
        let table = default_fare_table();
        let mock = MockDuffelClient::new();
        let config = SearchConfig::default().with_max_candidates_per_side(2);
        let aggregator = ItineraryAggregator::new(&table, &mock, &config);

        let pairs = aggregator.pairs(&codes(&["BOS", "PVD", "MHT"]), &codes(&["JFK", "LGA", "EWR"]));
        assert_eq!(
            pairs,
            vec![
                (code("BOS"), code("JFK")),
                (code("BOS"), code("LGA")),
                (code("PVD"), code("JFK")),
                (code("PVD"), code("LGA")),
            ]
        );
    }

    #[tokio::test]
    async fn pairs_without_offers_are_priced_empty() {
        let table = default_fare_table();
        let mock = MockDuffelClient::new();
        let config = SearchConfig::default();
        let aggregator = ItineraryAggregator::new(&table, &mock, &config);

        let origin = Location::new("o", "Boston, MA").unwrap();
        let destination = Location::new("d", "New York, NY").unwrap();
        let result = aggregator
            .aggregate(
                &origin,
                &destination,
                &codes(&["BOS"]),
                &codes(&["JFK", "LGA"]),
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                SearchObjective::Cheapest,
            )
            .await;

        assert!(result.itineraries.is_empty());
        assert_eq!(
            result.pairs,
            vec![
                (code("BOS"), code("JFK"), PairOutcome::Priced(0)),
                (code("BOS"), code("LGA"), PairOutcome::Priced(0)),
            ]
        );
    }
}
