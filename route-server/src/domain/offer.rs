//! Normalized flight offers.

use rust_decimal::Decimal;

/// A priced flight option for one airport pair and date.
///
/// Produced from a provider offer by `duffel::convert_offer`. All numeric
/// fields are already parsed; nothing downstream reads them back out of
/// display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightOffer {
    /// Operating carriers across all segments, e.g. "Delta + JetBlue".
    pub carrier_summary: String,

    /// Sum of all slice durations.
    pub duration_minutes: u32,

    /// Total price of the offer.
    pub cost: Decimal,

    /// ISO currency code for `cost`.
    pub currency: String,

    /// One human-readable line per flight segment, in travel order.
    pub segment_details: Vec<String>,

    /// Where the offer can be booked.
    pub booking_reference: String,
}
