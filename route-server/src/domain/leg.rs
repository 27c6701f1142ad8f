//! Ground legs between a location and an airport.

use rust_decimal::Decimal;

use super::DomainError;

/// Cost and duration of a ground transfer to or from an airport.
///
/// The same type serves both directions; which one it is depends on
/// where it sits in an [`Itinerary`](super::Itinerary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundLeg {
    cost: Decimal,
    duration_minutes: u32,
}

impl GroundLeg {
    /// Creates a ground leg, rejecting negative costs.
    pub fn new(cost: Decimal, duration_minutes: u32) -> Result<Self, DomainError> {
        if cost.is_sign_negative() && !cost.is_zero() {
            return Err(DomainError::NegativeCost(cost.to_string()));
        }
        Ok(Self {
            cost,
            duration_minutes,
        })
    }

    /// Creates a ground leg from a whole-unit cost, for fare tables.
    pub fn whole(cost: u32, duration_minutes: u32) -> Self {
        Self {
            cost: Decimal::from(cost),
            duration_minutes,
        }
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units() {
        let leg = GroundLeg::whole(45, 40);
        assert_eq!(leg.cost(), Decimal::from(45));
        assert_eq!(leg.duration_minutes(), 40);
    }

    #[test]
    fn fractional_cost() {
        let leg = GroundLeg::new(Decimal::new(1999, 2), 12).unwrap();
        assert_eq!(leg.cost().to_string(), "19.99");
    }

    #[test]
    fn negative_cost_rejected() {
        let err = GroundLeg::new(Decimal::new(-100, 2), 10).unwrap_err();
        assert_eq!(err, DomainError::NegativeCost("-1.00".into()));
    }

    #[test]
    fn zero_cost_allowed() {
        assert!(GroundLeg::new(Decimal::ZERO, 0).is_ok());
    }
}
