//! Duffel flight offers client.
//!
//! Key characteristics of the offer request endpoint:
//! - Authentication is a bearer token plus a `Duffel-Version` header
//! - Amounts are decimal strings, durations are ISO-8601 (`PT2H15M`)
//! - Error statuses still carry a JSON body worth relaying to callers

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DuffelClient, DuffelConfig, UpstreamReply};
pub use convert::{ConversionError, convert_offer, convert_offers};
pub use error::DuffelError;
pub use mock::MockDuffelClient;
pub use types::{
    OfferRequestData, OfferResponse, OfferSearchRequest, Passenger, RawAirport, RawAmount,
    RawCarrier, RawDuration, RawEndpoint, RawLinks, RawOffer, RawSegment, RawSlice,
};
