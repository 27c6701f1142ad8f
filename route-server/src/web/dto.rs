//! Data transfer objects for web requests and responses.
//!
//! This is the only place numbers become display strings. Every DTO also
//! carries the raw numeric values so clients never parse text back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, FlightOffer, GroundLeg, Itinerary, Location, SearchObjective};
use crate::planner::SearchResult;

/// Shown with every search result.
pub const CARRIER_NOTICE: &str = "Note: we currently do not support some airlines \
(e.g., Southwest, Ryanair, Wizz Air). If you don't see your preferred carrier, \
please check their official website directly.";

/// A place as chosen from autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    #[serde(default)]
    pub place_id: String,
    pub description: String,
}

impl PlaceDto {
    pub fn into_location(self) -> Result<Location, DomainError> {
        Location::new(self.place_id, self.description)
    }
}

impl From<&Location> for PlaceDto {
    fn from(location: &Location) -> Self {
        Self {
            place_id: location.place_id().to_string(),
            description: location.description().to_string(),
        }
    }
}

/// Query for address autocomplete.
#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    /// Free text typed so far
    #[serde(default)]
    pub input: String,
}

/// Request to search door-to-door itineraries.
#[derive(Debug, Deserialize)]
pub struct SearchItinerariesRequest {
    pub origin: PlaceDto,
    pub destination: PlaceDto,

    /// Departure date (defaults to today)
    pub date: Option<NaiveDate>,

    /// "cheapest", "fastest" or "balanced" (defaults to cheapest)
    pub objective: Option<String>,
}

/// A ground leg in results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundLegResult {
    /// Exact decimal amount, e.g. "45.00"
    pub cost: String,
    pub duration_minutes: u32,
    /// e.g. "USD 45.00"
    pub cost_display: String,
    /// e.g. "0h 40m"
    pub duration_display: String,
}

/// A flight in results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResult {
    pub carrier_summary: String,
    pub cost: String,
    pub currency: String,
    pub duration_minutes: u32,
    pub segment_details: Vec<String>,
    pub booking_reference: String,
    pub cost_display: String,
    pub duration_display: String,
}

/// A door-to-door itinerary in results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    pub origin_airport: String,
    pub destination_airport: String,
    pub ground_to_airport: GroundLegResult,
    pub flight: FlightResult,
    pub ground_from_airport: GroundLegResult,
    pub total_cost: String,
    pub total_duration_minutes: u32,
    pub total_cost_display: String,
    pub total_duration_display: String,
}

/// Response to an itinerary search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItinerariesResponse {
    pub objective: SearchObjective,
    /// Ranked best-first
    pub itineraries: Vec<ItineraryResult>,
    pub pairs_explored: usize,
    pub itineraries_considered: usize,
    pub notice: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl GroundLegResult {
    /// Ground fares are quoted in the same currency as the flight.
    pub fn from_leg(leg: &GroundLeg, currency: &str) -> Self {
        Self {
            cost: leg.cost().to_string(),
            duration_minutes: leg.duration_minutes(),
            cost_display: format_cost(currency, leg.cost()),
            duration_display: format_duration(leg.duration_minutes()),
        }
    }
}

impl FlightResult {
    pub fn from_offer(offer: &FlightOffer) -> Self {
        Self {
            carrier_summary: offer.carrier_summary.clone(),
            cost: offer.cost.to_string(),
            currency: offer.currency.clone(),
            duration_minutes: offer.duration_minutes,
            segment_details: offer.segment_details.clone(),
            booking_reference: offer.booking_reference.clone(),
            cost_display: format_cost(&offer.currency, offer.cost),
            duration_display: format_duration(offer.duration_minutes),
        }
    }
}

impl ItineraryResult {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let currency = itinerary.flight().currency.as_str();
        Self {
            origin_airport: itinerary.origin_airport().to_string(),
            destination_airport: itinerary.destination_airport().to_string(),
            ground_to_airport: GroundLegResult::from_leg(itinerary.ground_to_airport(), currency),
            flight: FlightResult::from_offer(itinerary.flight()),
            ground_from_airport: GroundLegResult::from_leg(
                itinerary.ground_from_airport(),
                currency,
            ),
            total_cost: itinerary.total_cost().to_string(),
            total_duration_minutes: itinerary.total_duration_minutes(),
            total_cost_display: format_cost(currency, itinerary.total_cost()),
            total_duration_display: format_duration(itinerary.total_duration_minutes()),
        }
    }
}

impl SearchItinerariesResponse {
    pub fn from_result(result: &SearchResult, objective: SearchObjective) -> Self {
        Self {
            objective,
            itineraries: result
                .itineraries
                .iter()
                .map(ItineraryResult::from_itinerary)
                .collect(),
            pairs_explored: result.pairs_explored,
            itineraries_considered: result.itineraries_considered,
            notice: CARRIER_NOTICE,
        }
    }
}

/// "2h 15m"
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// "USD 245.60", or just the amount when the currency is unknown.
pub fn format_cost(currency: &str, amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    if currency.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{currency} {amount:.2}")
    }
}
