//! Fixed fare table estimator.
//!
//! Looks up a per-airport fare and drive time. Airports missing from the
//! table get the table's default leg, so every valid code has an answer.

use std::collections::HashMap;

use crate::domain::{AirportCode, GroundLeg, Location};

use super::{GroundError, GroundTransportEstimator};

/// Default leg for airports not in the table.
const DEFAULT_COST: u32 = 50;
const DEFAULT_MINUTES: u32 = 45;

/// Per-airport ground fares.
///
/// The location is not consulted: every address near an airport is assumed
/// to pay the same fare.
#[derive(Debug, Clone)]
pub struct FareTable {
    fares: HashMap<AirportCode, GroundLeg>,
    default: GroundLeg,
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            fares: HashMap::new(),
            default: GroundLeg::whole(DEFAULT_COST, DEFAULT_MINUTES),
        }
    }
}

impl FareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fare for an airport, replacing any existing entry.
    pub fn insert(&mut self, airport: AirportCode, leg: GroundLeg) {
        self.fares.insert(airport, leg);
    }

    /// Look up an airport, falling back to the default leg.
    pub fn get(&self, airport: &AirportCode) -> GroundLeg {
        self.fares.get(airport).copied().unwrap_or(self.default)
    }

    /// The leg used for airports without an entry.
    pub fn default_leg(&self) -> GroundLeg {
        self.default
    }
}

impl GroundTransportEstimator for FareTable {
    async fn estimate(
        &self,
        _location: &Location,
        airport: &AirportCode,
    ) -> Result<GroundLeg, GroundError> {
        Ok(self.get(airport))
    }
}

/// Builder for a fare table.
#[derive(Debug, Default)]
pub struct FareTableBuilder {
    inner: FareTable,
}

impl FareTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fare in whole currency units. Invalid codes are ignored.
    pub fn fare(mut self, airport: &str, cost: u32, minutes: u32) -> Self {
        if let Ok(code) = AirportCode::parse(airport) {
            self.inner.insert(code, GroundLeg::whole(cost, minutes));
        }
        self
    }

    /// Override the leg used for unknown airports.
    pub fn default_leg(mut self, cost: u32, minutes: u32) -> Self {
        self.inner.default = GroundLeg::whole(cost, minutes);
        self
    }

    pub fn build(self) -> FareTable {
        self.inner
    }
}

/// Approximate rideshare fares and drive times for the airports known to
/// [`us_airports`](crate::airports::us_airports).
pub fn default_fare_table() -> FareTable {
    FareTableBuilder::new()
        .fare("BOS", 45, 40)
        .fare("PVD", 75, 55)
        .fare("MHT", 60, 60)
        .fare("JFK", 80, 60)
        .fare("LGA", 60, 45)
        .fare("EWR", 80, 70)
        .fare("SDF", 40, 30)
        .fare("CVG", 85, 80)
        .fare("ORD", 45, 40)
        .build()
}
