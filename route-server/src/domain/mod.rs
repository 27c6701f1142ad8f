//! Domain types for the door-to-door route planner.
//!
//! This module contains the core value types of a search. All types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod airport;
mod error;
mod itinerary;
mod leg;
mod location;
pub mod numeric;
mod objective;
mod offer;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::GroundLeg;
pub use location::Location;
pub use objective::{SearchObjective, UnknownObjective};
pub use offer::FlightOffer;
