//! Caching layer for flight offer responses.
//!
//! Offer prices move, but not within minutes, and a single search asks for
//! up to nine pairs. Caching the raw response per (pair, date) keeps repeat
//! searches and objective switches off the upstream.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::AirportCode;
use crate::duffel::{DuffelError, OfferSearchRequest, RawOffer};
use crate::planner::OfferProvider;

/// Cache key for offers: (origin, destination, date).
///
/// Passenger mix and cabin are fixed by the planner, so they are not part
/// of the key.
type OfferKey = (AirportCode, AirportCode, NaiveDate);

/// Cached offer list.
type OfferEntry = Arc<Vec<RawOffer>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Offer provider with caching.
///
/// Only successful responses are cached; errors are retried on the next
/// request.
pub struct CachedOfferProvider<P> {
    inner: P,
    offers: MokaCache<OfferKey, OfferEntry>,
}

impl<P: OfferProvider> CachedOfferProvider<P> {
    /// Create a new cached provider.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let offers = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, offers }
    }

    /// Access the underlying provider for operations that bypass cache.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.offers.invalidate_all();
    }
}

impl<P: OfferProvider> OfferProvider for CachedOfferProvider<P> {
    async fn fetch_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Arc<Vec<RawOffer>>, DuffelError> {
        let key = (request.origin, request.destination, request.date);

        if let Some(cached) = self.offers.get(&key).await {
            trace!(origin = %request.origin, destination = %request.destination, "Offer cache hit");
            return Ok(cached);
        }

        let entry = self.inner.fetch_offers(request).await?;
        self.offers.insert(key, entry.clone()).await;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn request(origin: &str, day: u32) -> OfferSearchRequest {
        OfferSearchRequest::one_adult(
            code(origin),
            code("JFK"),
            NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        )
    }

    /// Counts calls; fails when `fail` is set.
    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Counting {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl OfferProvider for Counting {
        async fn fetch_offers(
            &self,
            _request: &OfferSearchRequest,
        ) -> Result<Arc<Vec<RawOffer>>, DuffelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(DuffelError::Api {
                    status: 503,
                    body: "{}".into(),
                })
            } else {
                Ok(Arc::new(Vec::new()))
            }
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn repeat_request_hits_cache() {
        let cached = CachedOfferProvider::new(Counting::new(false), &CacheConfig::default());

        cached.fetch_offers(&request("BOS", 19)).await.unwrap();
        cached.fetch_offers(&request("BOS", 19)).await.unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);

        // Different date, different key.
        cached.fetch_offers(&request("BOS", 20)).await.unwrap();
        cached.fetch_offers(&request("PVD", 19)).await.unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cached = CachedOfferProvider::new(Counting::new(true), &CacheConfig::default());

        assert!(cached.fetch_offers(&request("BOS", 19)).await.is_err());
        assert!(cached.fetch_offers(&request("BOS", 19)).await.is_err());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cached = CachedOfferProvider::new(Counting::new(false), &CacheConfig::default());

        cached.fetch_offers(&request("BOS", 19)).await.unwrap();
        cached.invalidate_all();
        cached.fetch_offers(&request("BOS", 19)).await.unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }
}
