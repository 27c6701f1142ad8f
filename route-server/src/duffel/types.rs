//! Duffel offer request/response DTOs.
//!
//! These types map directly to the JSON exchanged with the offer-request
//! endpoint. They use `Option` and defaulted fields liberally because a
//! missing field should degrade one offer, not fail the whole response.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::AirportCode;

/// Cabin class sent with every search.
pub const ECONOMY: &str = "economy";

/// Body of an offer search, as posted to the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSearchRequest {
    pub origin: AirportCode,
    pub destination: AirportCode,
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub passengers: Vec<Passenger>,
    pub cabin_class: String,
}

impl OfferSearchRequest {
    /// One adult in economy.
    pub fn one_adult(origin: AirportCode, destination: AirportCode, date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            date,
            passengers: vec![Passenger::adult()],
            cabin_class: ECONOMY.to_string(),
        }
    }
}

/// A passenger in an offer search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Passenger {
    pub fn adult() -> Self {
        Self {
            kind: "adult".to_string(),
        }
    }
}

/// Offer list as returned upstream.
///
/// The proxy relays whatever upstream sends, which is either the bare
/// offer array or the offer request envelope `{ "data": { "offers": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OfferResponse {
    Bare(Vec<RawOffer>),
    Envelope { data: OfferRequestData },
}

impl OfferResponse {
    pub fn into_offers(self) -> Vec<RawOffer> {
        match self {
            OfferResponse::Bare(offers) => offers,
            OfferResponse::Envelope { data } => data.offers,
        }
    }
}

/// The `data` object of an offer request.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferRequestData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub offers: Vec<RawOffer>,
}

/// A single offer as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOffer {
    /// Offer identifier, used to derive a booking link.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Total price; normally a decimal string like "245.60".
    pub total_amount: Option<RawAmount>,

    /// ISO currency code of `total_amount`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_currency: String,

    /// One slice per journey direction.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slices: Vec<RawSlice>,

    pub links: Option<RawLinks>,
}

/// An amount that may arrive as a string or as a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

/// A slice: a sequence of segments between two airports.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlice {
    /// Slice duration; minutes or an ISO-8601 duration.
    pub duration: Option<RawDuration>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<RawSegment>,
}

/// A duration that may arrive as minutes or as `PT2H15M`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Minutes(f64),
    Iso(String),
}

/// One flight within a slice.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    pub operating_carrier: Option<RawCarrier>,
    pub departure: Option<RawEndpoint>,
    pub arrival: Option<RawEndpoint>,
}

/// Carrier operating a segment.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCarrier {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Departure or arrival of a segment.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEndpoint {
    pub airport: Option<RawAirport>,
    /// Local timestamp, e.g. "2026-10-19T08:05:00".
    #[serde(default, deserialize_with = "null_as_default")]
    pub at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAirport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iata_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// Read an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
