//! Ranking under a search objective.
//!
//! The same ordering rules apply at two scopes: the offers of one airport
//! pair, and the final itinerary list. Balanced scores are normalized over
//! whichever set is being sorted, so each scope recomputes its own maxima.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::numeric::{normalized, to_f64};
use crate::domain::{FlightOffer, Itinerary, SearchObjective};

/// Something with a cost and a duration that can be ranked.
pub trait Rankable {
    fn rank_cost(&self) -> Decimal;

    fn rank_duration(&self) -> u32;

    /// Deterministic order between items whose objective keys are equal.
    fn tie_break(&self, other: &Self) -> Ordering;
}

impl Rankable for FlightOffer {
    fn rank_cost(&self) -> Decimal {
        self.cost
    }

    fn rank_duration(&self) -> u32 {
        self.duration_minutes
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.duration_minutes.cmp(&other.duration_minutes))
            .then_with(|| self.carrier_summary.cmp(&other.carrier_summary))
            .then_with(|| self.booking_reference.cmp(&other.booking_reference))
    }
}

impl Rankable for Itinerary {
    fn rank_cost(&self) -> Decimal {
        self.total_cost()
    }

    fn rank_duration(&self) -> u32 {
        self.total_duration_minutes()
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        self.origin_airport()
            .cmp(other.origin_airport())
            .then_with(|| self.destination_airport().cmp(other.destination_airport()))
            .then_with(|| self.flight().cost.cmp(&other.flight().cost))
            .then_with(|| {
                self.flight()
                    .duration_minutes
                    .cmp(&other.flight().duration_minutes)
            })
            .then_with(|| {
                self.flight()
                    .carrier_summary
                    .cmp(&other.flight().carrier_summary)
            })
    }
}

/// Sort best-first under `objective`. Stable, so fully equal items keep
/// their input order.
pub fn sort_by_objective<T: Rankable>(mut items: Vec<T>, objective: SearchObjective) -> Vec<T> {
    match objective {
        SearchObjective::Cheapest => {
            items.sort_by(|a, b| {
                a.rank_cost()
                    .cmp(&b.rank_cost())
                    .then_with(|| a.tie_break(b))
            });
            items
        }
        SearchObjective::Fastest => {
            items.sort_by(|a, b| {
                a.rank_duration()
                    .cmp(&b.rank_duration())
                    .then_with(|| a.tie_break(b))
            });
            items
        }
        SearchObjective::Balanced => {
            let scores = balanced_scores(&items);
            let mut scored: Vec<(f64, T)> = scores.into_iter().zip(items).collect();
            scored.sort_by(|(sa, a), (sb, b)| sa.total_cmp(sb).then_with(|| a.tie_break(b)));
            scored.into_iter().map(|(_, item)| item).collect()
        }
    }
}

/// `cost / max_cost + duration / max_duration` for each item, with maxima
/// taken over `items`.
pub fn balanced_scores<T: Rankable>(items: &[T]) -> Vec<f64> {
    let max_cost = items
        .iter()
        .map(|i| to_f64(i.rank_cost()))
        .fold(0.0, f64::max);
    let max_duration = items
        .iter()
        .map(|i| f64::from(i.rank_duration()))
        .fold(0.0, f64::max);

    items
        .iter()
        .map(|i| {
            normalized(to_f64(i.rank_cost()), max_cost)
                + normalized(f64::from(i.rank_duration()), max_duration)
        })
        .collect()
}

/// Rank the offers of one pair and keep the best `limit`.
pub fn rank_offers(
    offers: Vec<FlightOffer>,
    objective: SearchObjective,
    limit: usize,
) -> Vec<FlightOffer> {
    let mut ranked = sort_by_objective(offers, objective);
    ranked.truncate(limit);
    ranked
}

/// Rank the full itinerary set and keep the best `limit`.
pub fn rank_itineraries(
    itineraries: Vec<Itinerary>,
    objective: SearchObjective,
    limit: usize,
) -> Vec<Itinerary> {
    let mut ranked = sort_by_objective(itineraries, objective);
    ranked.truncate(limit);
    ranked
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{AirportCode, GroundLeg};
    use proptest::prelude::*;

    const CODES: [&str; 4] = ["BOS", "JFK", "LGA", "PVD"];

    fn arb_itinerary() -> impl Strategy<Value = Itinerary> {
        (0..CODES.len(), 0..CODES.len(), 0u32..5000, 0u32..2000, 0u32..200, 0u32..120).prop_map(
            |(o, d, cost, minutes, ground_cost, ground_minutes)| {
                Itinerary::new(
                    AirportCode::parse(CODES[o]).unwrap(),
                    AirportCode::parse(CODES[d]).unwrap(),
                    GroundLeg::whole(ground_cost, ground_minutes),
                    FlightOffer {
                        carrier_summary: "Test Air".to_string(),
                        duration_minutes: minutes,
                        cost: Decimal::from(cost),
                        currency: "USD".to_string(),
                        segment_details: vec![],
                        booking_reference: String::new(),
                    },
                    GroundLeg::whole(ground_cost, ground_minutes),
                )
            },
        )
    }

    /// Itineraries whose cost and duration are the same number.
    fn arb_symmetric() -> impl Strategy<Value = Itinerary> {
        (0..CODES.len(), 0..CODES.len(), 1u32..5000).prop_map(|(o, d, value)| {
            Itinerary::new(
                AirportCode::parse(CODES[o]).unwrap(),
                AirportCode::parse(CODES[d]).unwrap(),
                GroundLeg::whole(0, 0),
                FlightOffer {
                    carrier_summary: "Test Air".to_string(),
                    duration_minutes: value,
                    cost: Decimal::from(value),
                    currency: "USD".to_string(),
                    segment_details: vec![],
                    booking_reference: String::new(),
                },
                GroundLeg::whole(0, 0),
            )
        })
    }

    proptest! {
        #[test]
        fn cheapest_is_sorted_by_cost(items in prop::collection::vec(arb_itinerary(), 0..30)) {
            let ranked = sort_by_objective(items, SearchObjective::Cheapest);
            for w in ranked.windows(2) {
                prop_assert!(w[0].total_cost() <= w[1].total_cost());
            }
        }

        #[test]
        fn fastest_is_sorted_by_duration(items in prop::collection::vec(arb_itinerary(), 0..30)) {
            let ranked = sort_by_objective(items, SearchObjective::Fastest);
            for w in ranked.windows(2) {
                prop_assert!(w[0].total_duration_minutes() <= w[1].total_duration_minutes());
            }
        }

        #[test]
        fn balanced_is_sorted_by_score(items in prop::collection::vec(arb_itinerary(), 0..30)) {
            let ranked = sort_by_objective(items, SearchObjective::Balanced);
            let scores = balanced_scores(&ranked);
            for w in scores.windows(2) {
                prop_assert!(w[0] <= w[1]);
            }
        }

        #[test]
        fn never_more_than_limit(
            items in prop::collection::vec(arb_itinerary(), 0..30),
            objective in prop_oneof![
                Just(SearchObjective::Cheapest),
                Just(SearchObjective::Fastest),
                Just(SearchObjective::Balanced),
            ],
        ) {
            let n = items.len();
            let ranked = rank_itineraries(items, objective, 3);
            prop_assert_eq!(ranked.len(), n.min(3));
        }

        #[test]
        fn sorting_preserves_elements(items in prop::collection::vec(arb_itinerary(), 0..30)) {
            let ranked = sort_by_objective(items.clone(), SearchObjective::Balanced);
            prop_assert_eq!(ranked.len(), items.len());
            for item in &items {
                prop_assert!(ranked.contains(item));
            }
        }

        #[test]
        fn balanced_matches_single_key_on_symmetric_data(
            items in prop::collection::vec(arb_symmetric(), 0..30),
        ) {
            let balanced = sort_by_objective(items.clone(), SearchObjective::Balanced);
            let cheapest = sort_by_objective(items.clone(), SearchObjective::Cheapest);
            let fastest = sort_by_objective(items, SearchObjective::Fastest);
            prop_assert_eq!(&balanced, &cheapest);
            prop_assert_eq!(&balanced, &fastest);
        }

        #[test]
        fn deterministic(items in prop::collection::vec(arb_itinerary(), 0..30)) {
            let a = rank_itineraries(items.clone(), SearchObjective::Balanced, 3);
            let b = rank_itineraries(items, SearchObjective::Balanced, 3);
            prop_assert_eq!(a, b);
        }
    }
}
