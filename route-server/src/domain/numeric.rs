//! Numeric parsing and normalization helpers.
//!
//! Provider data arrives as strings. Anything that cannot be read as a
//! number becomes zero, so one malformed record never aborts a ranking pass.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parse a monetary amount such as `"245.60"`.
///
/// Currency symbols and codes around the number are ignored (`"$45.00"`,
/// `"USD 45.00"`). Unparseable or negative input yields zero.
pub fn parse_amount(s: &str) -> Decimal {
    let trimmed = s.trim();
    let parsed = Decimal::from_str(trimmed).ok().or_else(|| {
        let digits: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        Decimal::from_str(&digits).ok()
    });

    match parsed {
        Some(amount) if amount.is_sign_negative() => Decimal::ZERO,
        Some(amount) => amount,
        None => Decimal::ZERO,
    }
}

/// Parse an ISO-8601 duration (`PT2H15M`, `P1DT3H`) into whole minutes.
///
/// Seconds are truncated. Returns 0 for anything that is not a duration.
pub fn parse_iso_duration_minutes(s: &str) -> u32 {
    let Some(rest) = s.trim().strip_prefix('P') else {
        return 0;
    };

    let mut minutes: u64 = 0;
    let mut number = String::new();
    let mut in_time = false;
    let mut seen_unit = false;

    for c in rest.chars() {
        match c {
            'T' if !in_time => in_time = true,
            '0'..='9' | '.' => number.push(c),
            unit => {
                let Ok(value) = number.parse::<f64>() else {
                    return 0;
                };
                number.clear();
                seen_unit = true;

                let factor = match (unit, in_time) {
                    ('W', false) => 7.0 * 24.0 * 60.0,
                    ('D', false) => 24.0 * 60.0,
                    ('H', true) => 60.0,
                    ('M', true) => 1.0,
                    ('S', true) => 1.0 / 60.0,
                    _ => return 0,
                };
                minutes += (value * factor) as u64;
            }
        }
    }

    if !number.is_empty() || !seen_unit {
        return 0;
    }

    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Lossy conversion used only for scoring, never for totals.
pub fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

/// Scale `value` by the set maximum. A maximum of zero means every value
/// in that dimension is zero, so the value is used as-is.
pub fn normalized(value: f64, max: f64) -> f64 {
    if max > 0.0 { value / max } else { value }
}
