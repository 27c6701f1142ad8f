//! Door-to-door itineraries.
//!
//! An `Itinerary` is exactly three legs: ground to the origin airport, a
//! flight, and ground from the destination airport. Totals are computed
//! once at construction and the value is never mutated afterwards.

use rust_decimal::Decimal;

use super::{AirportCode, FlightOffer, GroundLeg};

/// A complete door-to-door option.
///
/// # Invariants
///
/// - `total_cost == ground_to_airport.cost + flight.cost + ground_from_airport.cost`
/// - `total_duration_minutes` is the analogous sum of durations
///
/// Both sums saturate rather than overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    origin_airport: AirportCode,
    destination_airport: AirportCode,
    ground_to_airport: GroundLeg,
    flight: FlightOffer,
    ground_from_airport: GroundLeg,
    total_cost: Decimal,
    total_duration_minutes: u32,
}

impl Itinerary {
    /// Combines the three legs and computes the totals.
    pub fn new(
        origin_airport: AirportCode,
        destination_airport: AirportCode,
        ground_to_airport: GroundLeg,
        flight: FlightOffer,
        ground_from_airport: GroundLeg,
    ) -> Self {
        let total_cost = ground_to_airport
            .cost()
            .checked_add(flight.cost)
            .and_then(|sum| sum.checked_add(ground_from_airport.cost()))
            .unwrap_or(Decimal::MAX);
        let total_duration_minutes = ground_to_airport
            .duration_minutes()
            .saturating_add(flight.duration_minutes)
            .saturating_add(ground_from_airport.duration_minutes());

        Self {
            origin_airport,
            destination_airport,
            ground_to_airport,
            flight,
            ground_from_airport,
            total_cost,
            total_duration_minutes,
        }
    }

    pub fn origin_airport(&self) -> &AirportCode {
        &self.origin_airport
    }

    pub fn destination_airport(&self) -> &AirportCode {
        &self.destination_airport
    }

    pub fn ground_to_airport(&self) -> &GroundLeg {
        &self.ground_to_airport
    }

    pub fn flight(&self) -> &FlightOffer {
        &self.flight
    }

    pub fn ground_from_airport(&self) -> &GroundLeg {
        &self.ground_from_airport
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    pub fn total_duration_minutes(&self) -> u32 {
        self.total_duration_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn offer(cost: Decimal, duration_minutes: u32) -> FlightOffer {
        FlightOffer {
            carrier_summary: "Test Air".into(),
            duration_minutes,
            cost,
            currency: "USD".into(),
            segment_details: vec![],
            booking_reference: "https://duffel.com/bookings/off_1".into(),
        }
    }

    #[test]
    fn totals_are_sums() {
        let it = Itinerary::new(
            code("BOS"),
            code("JFK"),
            GroundLeg::whole(45, 40),
            offer(Decimal::new(12950, 2), 75),
            GroundLeg::whole(80, 60),
        );

        assert_eq!(it.total_cost(), Decimal::new(25450, 2));
        assert_eq!(it.total_duration_minutes(), 175);
        assert_eq!(it.origin_airport(), &code("BOS"));
        assert_eq!(it.destination_airport(), &code("JFK"));
        assert_eq!(it.flight().duration_minutes, 75);
    }

    #[test]
    fn duration_saturates() {
        let it = Itinerary::new(
            code("BOS"),
            code("JFK"),
            GroundLeg::whole(0, u32::MAX),
            offer(Decimal::ZERO, 10),
            GroundLeg::whole(0, 10),
        );
        assert_eq!(it.total_duration_minutes(), u32::MAX);
    }

    #[test]
    fn cost_saturates() {
        let it = Itinerary::new(
            code("BOS"),
            code("JFK"),
            GroundLeg::whole(45, 40),
            offer(Decimal::MAX, 75),
            GroundLeg::whole(80, 60),
        );
        assert_eq!(it.total_cost(), Decimal::MAX);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn totals_match_leg_sums(
            to_cents in 0i64..100_000,
            flight_cents in 0i64..1_000_000,
            from_cents in 0i64..100_000,
            to_mins in 0u32..600,
            flight_mins in 0u32..2_000,
            from_mins in 0u32..600,
        ) {
            let to = GroundLeg::new(Decimal::new(to_cents, 2), to_mins).unwrap();
            let from = GroundLeg::new(Decimal::new(from_cents, 2), from_mins).unwrap();
            let flight = FlightOffer {
                carrier_summary: String::new(),
                duration_minutes: flight_mins,
                cost: Decimal::new(flight_cents, 2),
                currency: "USD".into(),
                segment_details: vec![],
                booking_reference: String::new(),
            };

            let it = Itinerary::new(
                AirportCode::parse("PVD").unwrap(),
                AirportCode::parse("EWR").unwrap(),
                to,
                flight,
                from,
            );

            prop_assert_eq!(
                it.total_cost(),
                it.ground_to_airport().cost() + it.flight().cost + it.ground_from_airport().cost()
            );
            prop_assert_eq!(it.total_duration_minutes(), to_mins + flight_mins + from_mins);
        }
    }
}
