//! Web layer for the route planner.
//!
//! Provides the offer proxy, itinerary search and address autocomplete
//! endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, MISSING_KEY_MESSAGE, PROXY_ERROR_MESSAGE, create_router};
pub use state::{AppState, OfferBackend};
