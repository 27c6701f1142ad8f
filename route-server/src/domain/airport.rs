//! Airport code type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::AirportCode;
///
/// let bos = AirportCode::parse("BOS").unwrap();
/// assert_eq!(bos.as_str(), "BOS");
///
/// // Lowercase is rejected by the strict parser
/// assert!(AirportCode::parse("bos").is_err());
///
/// // but accepted when normalized first
/// assert_eq!(AirportCode::parse_normalized(" bos ").unwrap(), bos);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// uppercased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirportCode::parse_normalized(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("BOS").is_ok());
        assert!(AirportCode::parse("JFK").is_ok());
        assert!(AirportCode::parse("SDF").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("bos").is_err());
        assert!(AirportCode::parse("Bos").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("BO").is_err());
        assert!(AirportCode::parse("BOST").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("B0S").is_err());
        assert!(AirportCode::parse("B-S").is_err());
        assert!(AirportCode::parse("B S").is_err());
    }

    #[test]
    fn normalized_parsing() {
        let code = AirportCode::parse_normalized("  jfk\n").unwrap();
        assert_eq!(code.as_str(), "JFK");
        assert!(AirportCode::parse_normalized("j k").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let bos = AirportCode::parse("BOS").unwrap();
        let jfk = AirportCode::parse("JFK").unwrap();
        assert!(bos < jfk);
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("EWR").unwrap();
        assert_eq!(format!("{code}"), "EWR");
        assert_eq!(format!("{code:?}"), "AirportCode(EWR)");
    }

    #[test]
    fn serde_as_string() {
        let code = AirportCode::parse("LGA").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"LGA\"");

        let parsed: AirportCode = serde_json::from_str("\"lga\"").unwrap();
        assert_eq!(parsed, code);

        assert!(serde_json::from_str::<AirportCode>("\"LGAX\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
