//! Ground transport estimates between a location and an airport.
//!
//! The estimator contract is total: every call either produces a
//! [`GroundLeg`] or reports a [`GroundError`] to the caller. Nothing is
//! silently skipped.

mod error;
mod fallback;
mod table;

use std::future::Future;

pub use error::GroundError;
pub use fallback::FallbackEstimator;
pub use table::{FareTable, FareTableBuilder, default_fare_table};

use crate::domain::{AirportCode, GroundLeg, Location};

/// Estimates the cost and duration of getting between a location and an
/// airport, in either direction.
pub trait GroundTransportEstimator: Send + Sync {
    fn estimate(
        &self,
        location: &Location,
        airport: &AirportCode,
    ) -> impl Future<Output = Result<GroundLeg, GroundError>> + Send;
}
