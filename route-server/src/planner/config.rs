//! Search configuration for the itinerary planner.

use std::time::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of itineraries to return.
    pub max_results: usize,

    /// Offers kept per airport pair after ranking.
    pub offers_per_pair: usize,

    /// Airport candidates considered per side.
    /// Bounds the cross product at `max_candidates_per_side²` pairs.
    pub max_candidates_per_side: usize,

    /// Pairs evaluated concurrently.
    pub max_concurrent_pairs: usize,

    /// Time allowed for one pair (ground legs plus offers), in milliseconds.
    /// A pair that runs over contributes no itineraries.
    pub pair_timeout_ms: u64,
}

impl SearchConfig {
    /// Returns the pair timeout as a Duration.
    pub fn pair_timeout(&self) -> Duration {
        Duration::from_millis(self.pair_timeout_ms)
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    pub fn with_offers_per_pair(mut self, n: usize) -> Self {
        self.offers_per_pair = n;
        self
    }

    pub fn with_max_candidates_per_side(mut self, n: usize) -> Self {
        self.max_candidates_per_side = n;
        self
    }

    pub fn with_max_concurrent_pairs(mut self, n: usize) -> Self {
        self.max_concurrent_pairs = n;
        self
    }

    pub fn with_pair_timeout_ms(mut self, ms: u64) -> Self {
        self.pair_timeout_ms = ms;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            offers_per_pair: 3,
            max_candidates_per_side: 3,
            max_concurrent_pairs: 4,
            pair_timeout_ms: 20_000,
        }
    }
}
