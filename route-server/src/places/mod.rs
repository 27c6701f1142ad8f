//! Address resolution for free-text input.
//!
//! Turns what a user types into candidate [`Location`](crate::domain::Location)s
//! via the Google Places Autocomplete API.

mod client;
mod error;

pub use client::{MIN_INPUT_CHARS, PlacesClient, PlacesConfig};
pub use error::PlacesError;
