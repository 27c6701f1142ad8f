//! Door-to-door itinerary planner.
//!
//! This module answers "how do I get from this address to that one by
//! air?" by pairing candidate airports on both sides, pricing the ground
//! legs and flights for each pair, and ranking the combinations.

mod aggregate;
mod config;
mod offers;
mod rank;
mod search;


pub use aggregate::{Aggregation, ItineraryAggregator, PairOutcome};
pub use config::SearchConfig;
pub use offers::{FlightOfferService, OfferProvider};
pub use rank::{Rankable, balanced_scores, rank_itineraries, rank_offers, sort_by_objective};
pub use search::{Planner, SearchError, SearchRequest, SearchResult};
