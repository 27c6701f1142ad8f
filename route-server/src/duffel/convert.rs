//! Conversion from Duffel DTOs to domain types.
//!
//! Structural gaps (no price, no slices) and implausible prices drop the
//! offer. Values that are present but malformed are read as zero rather
//! than failing the batch.

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::FlightOffer;
use crate::domain::numeric::{parse_amount, parse_iso_duration_minutes};

use super::types::{RawAmount, RawDuration, RawOffer, RawSegment};

/// Base for booking links when an offer carries no `links.self`.
const BOOKING_BASE_URL: &str = "https://duffel.com/bookings";

/// Shown when no segment names its operating carrier.
const UNKNOWN_CARRIER: &str = "Unknown carrier";

/// Largest accepted offer price. Keeps itinerary sums well inside `Decimal`.
const MAX_OFFER_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Price too large to be a real fare
    #[error("amount out of range: {0}")]
    AmountOutOfRange(Decimal),
}

/// Convert a batch of offers, skipping any that cannot be converted.
pub fn convert_offers(offers: &[RawOffer]) -> Vec<FlightOffer> {
    offers
        .iter()
        .filter_map(|raw| match convert_offer(raw) {
            Ok(offer) => Some(offer),
            Err(e) => {
                trace!(offer_id = %raw.id, error = %e, "Skipping offer");
                None
            }
        })
        .collect()
}

/// Convert a single provider offer.
pub fn convert_offer(raw: &RawOffer) -> Result<FlightOffer, ConversionError> {
    if raw.slices.is_empty() {
        return Err(ConversionError::MissingField("slices"));
    }
    let amount = raw
        .total_amount
        .as_ref()
        .ok_or(ConversionError::MissingField("total_amount"))?;
    let cost = amount_value(amount);
    if cost > MAX_OFFER_AMOUNT {
        return Err(ConversionError::AmountOutOfRange(cost));
    }

    let carrier_summary = raw
        .slices
        .iter()
        .flat_map(|slice| slice.segments.iter())
        .filter_map(carrier_name)
        .collect::<Vec<_>>()
        .join(" + ");

    let duration_minutes = raw
        .slices
        .iter()
        .map(|slice| slice.duration.as_ref().map_or(0, duration_minutes))
        .fold(0u32, u32::saturating_add);

    let segment_details = raw
        .slices
        .iter()
        .flat_map(|slice| slice.segments.iter())
        .map(describe_segment)
        .collect();

    let booking_reference = raw
        .links
        .as_ref()
        .and_then(|l| l.self_link.clone())
        .filter(|link| !link.is_empty())
        .unwrap_or_else(|| format!("{BOOKING_BASE_URL}/{}", raw.id));

    Ok(FlightOffer {
        carrier_summary: if carrier_summary.is_empty() {
            UNKNOWN_CARRIER.to_string()
        } else {
            carrier_summary
        },
        duration_minutes,
        cost,
        currency: raw.total_currency.clone(),
        segment_details,
        booking_reference,
    })
}

fn carrier_name(segment: &RawSegment) -> Option<&str> {
    segment
        .operating_carrier
        .as_ref()
        .map(|c| c.name.trim())
        .filter(|name| !name.is_empty())
}

fn amount_value(amount: &RawAmount) -> Decimal {
    match amount {
        RawAmount::Text(s) => parse_amount(s),
        RawAmount::Number(n) => Decimal::try_from(*n)
            .ok()
            .filter(|d| !d.is_sign_negative())
            .unwrap_or(Decimal::ZERO),
    }
}

fn duration_minutes(duration: &RawDuration) -> u32 {
    match duration {
        RawDuration::Minutes(m) if m.is_finite() && *m > 0.0 => *m as u32,
        RawDuration::Minutes(_) => 0,
        RawDuration::Iso(s) => parse_iso_duration_minutes(s),
    }
}

/// "Delta flight from BOS to JFK, departs at ..., arrives at ..."
fn describe_segment(segment: &RawSegment) -> String {
    let carrier = carrier_name(segment).unwrap_or(UNKNOWN_CARRIER);
    let airport = |endpoint: &Option<super::types::RawEndpoint>| {
        endpoint
            .as_ref()
            .and_then(|e| e.airport.as_ref())
            .map(|a| a.iata_code.clone())
            .unwrap_or_default()
    };
    let at = |endpoint: &Option<super::types::RawEndpoint>| {
        endpoint.as_ref().map(|e| e.at.clone()).unwrap_or_default()
    };

    format!(
        "{carrier} flight from {} to {}, departs at {}, arrives at {}",
        airport(&segment.departure),
        airport(&segment.arrival),
        at(&segment.departure),
        at(&segment.arrival),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawOffer {
        serde_json::from_value(value).unwrap()
    }

    fn segment(carrier: &str, from: &str, to: &str, dep: &str, arr: &str) -> serde_json::Value {
        json!({
            "operating_carrier": { "name": carrier },
            "departure": { "airport": { "iata_code": from }, "at": dep },
            "arrival": { "airport": { "iata_code": to }, "at": arr },
        })
    }

    #[test]
    fn full_offer() {
        let offer = convert_offer(&raw(json!({
            "id": "off_123",
            "total_amount": "245.60",
            "total_currency": "USD",
            "slices": [{
                "duration": 150,
                "segments": [
                    segment("Delta", "BOS", "DTW", "2026-10-19T08:00:00", "2026-10-19T09:45:00"),
                    segment("JetBlue", "DTW", "JFK", "2026-10-19T10:30:00", "2026-10-19T11:30:00"),
                ],
            }],
            "links": { "self": "https://example.test/offers/off_123" },
        })))
        .unwrap();

        assert_eq!(offer.carrier_summary, "Delta + JetBlue");
        assert_eq!(offer.duration_minutes, 150);
        assert_eq!(offer.cost, Decimal::new(24560, 2));
        assert_eq!(offer.currency, "USD");
        assert_eq!(offer.booking_reference, "https://example.test/offers/off_123");
        assert_eq!(
            offer.segment_details,
            vec![
                "Delta flight from BOS to DTW, departs at 2026-10-19T08:00:00, arrives at 2026-10-19T09:45:00",
                "JetBlue flight from DTW to JFK, departs at 2026-10-19T10:30:00, arrives at 2026-10-19T11:30:00",
            ]
        );
    }

    #[test]
    fn durations_sum_across_slices() {
        let offer = convert_offer(&raw(json!({
            "id": "off_rt",
            "total_amount": "300.00",
            "slices": [
                { "duration": "PT1H15M", "segments": [] },
                { "duration": 80, "segments": [] },
            ],
        })))
        .unwrap();

        assert_eq!(offer.duration_minutes, 155);
        assert_eq!(offer.carrier_summary, UNKNOWN_CARRIER);
    }

    #[test]
    fn booking_link_derived_from_id() {
        let offer = convert_offer(&raw(json!({
            "id": "off_9",
            "total_amount": "10",
            "slices": [{ "duration": 60 }],
            "links": { "self": null },
        })))
        .unwrap();

        assert_eq!(offer.booking_reference, "https://duffel.com/bookings/off_9");
    }

    #[test]
    fn malformed_numbers_become_zero() {
        let offer = convert_offer(&raw(json!({
            "id": "off_bad",
            "total_amount": "call us",
            "slices": [{ "duration": "soon" }, { "duration": -5 }],
        })))
        .unwrap();

        assert_eq!(offer.cost, Decimal::ZERO);
        assert_eq!(offer.duration_minutes, 0);
    }

    #[test]
    fn numeric_amount() {
        let offer = convert_offer(&raw(json!({
            "total_amount": 99.5,
            "slices": [{ "duration": 60 }],
        })))
        .unwrap();
        assert_eq!(offer.cost, Decimal::new(995, 1));
    }

    #[test]
    fn structural_gaps_are_errors() {
        let no_slices = raw(json!({ "id": "a", "total_amount": "1.00" }));
        assert_eq!(
            convert_offer(&no_slices),
            Err(ConversionError::MissingField("slices"))
        );

        let no_price = raw(json!({ "id": "b", "slices": [{ "duration": 60 }] }));
        assert_eq!(
            convert_offer(&no_price),
            Err(ConversionError::MissingField("total_amount"))
        );
    }

    #[test]
    fn huge_amount_is_dropped() {
        let huge = raw(json!({
            "id": "off_huge",
            "total_amount": "79228162514264337593543950335",
            "slices": [{ "duration": 60 }],
        }));
        assert!(matches!(
            convert_offer(&huge),
            Err(ConversionError::AmountOutOfRange(_))
        ));

        let limit = raw(json!({
            "id": "off_limit",
            "total_amount": "1000000000",
            "slices": [{ "duration": 60 }],
        }));
        assert_eq!(convert_offer(&limit).unwrap().cost, MAX_OFFER_AMOUNT);
    }

    #[test]
    fn batch_skips_bad_offers() {
        let offers = vec![
            raw(json!({ "id": "ok", "total_amount": "5", "slices": [{ "duration": 60 }] })),
            raw(json!({ "id": "bad" })),
        ];
        let converted = convert_offers(&offers);
        assert_eq!(converted.len(), 1);
        assert!(converted[0].booking_reference.ends_with("/ok"));
    }
}
