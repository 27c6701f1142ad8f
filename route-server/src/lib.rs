//! Door-to-door route planner server.
//!
//! A web application that answers: "what is the cheapest, fastest or best
//! balanced way to get from this address to that one, flying in between?"

pub mod airports;
pub mod cache;
pub mod domain;
pub mod duffel;
pub mod ground;
pub mod places;
pub mod planner;
pub mod web;
