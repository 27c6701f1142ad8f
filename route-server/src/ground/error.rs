//! Ground transport error types.

use crate::domain::AirportCode;

/// Errors from a ground transport estimator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroundError {
    /// The pricing/routing provider could not produce an estimate
    #[error("no ground estimate for {airport}: {message}")]
    Unavailable {
        airport: AirportCode,
        message: String,
    },
}
