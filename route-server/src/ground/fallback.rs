//! Fallback wrapper for unreliable estimators.

use tracing::warn;

use crate::domain::{AirportCode, GroundLeg, Location};

use super::{GroundError, GroundTransportEstimator};

/// Wraps an estimator so that provider failures become a default leg.
///
/// Used around live pricing backends so that one failed quote does not
/// remove an airport pair from the search.
#[derive(Debug, Clone)]
pub struct FallbackEstimator<E> {
    inner: E,
    fallback: GroundLeg,
}

impl<E> FallbackEstimator<E> {
    pub fn new(inner: E, fallback: GroundLeg) -> Self {
        Self { inner, fallback }
    }
}

impl<E: GroundTransportEstimator> GroundTransportEstimator for FallbackEstimator<E> {
    async fn estimate(
        &self,
        location: &Location,
        airport: &AirportCode,
    ) -> Result<GroundLeg, GroundError> {
        match self.inner.estimate(location, airport).await {
            Ok(leg) => Ok(leg),
            Err(e) => {
                warn!(airport = %airport, error = %e, "Ground estimate failed, using fallback");
                Ok(self.fallback)
            }
        }
    }
}
