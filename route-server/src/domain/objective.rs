//! Search objective.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How results are ordered.
///
/// Chosen once per search and applied both to the offers within each
/// airport pair and to the final list of itineraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchObjective {
    /// Lowest total cost first.
    #[default]
    Cheapest,
    /// Shortest total duration first.
    Fastest,
    /// Lowest sum of cost and duration, each scaled by the set maximum.
    Balanced,
}

/// Error returned when parsing an unknown objective name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search objective: {0}")]
pub struct UnknownObjective(String);

impl FromStr for SearchObjective {
    type Err = UnknownObjective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheapest" => Ok(Self::Cheapest),
            "fastest" => Ok(Self::Fastest),
            "balanced" => Ok(Self::Balanced),
            _ => Err(UnknownObjective(s.to_string())),
        }
    }
}

impl fmt::Display for SearchObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cheapest => "cheapest",
            Self::Fastest => "fastest",
            Self::Balanced => "balanced",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("cheapest".parse::<SearchObjective>(), Ok(SearchObjective::Cheapest));
        assert_eq!("Fastest".parse::<SearchObjective>(), Ok(SearchObjective::Fastest));
        assert_eq!(" BALANCED ".parse::<SearchObjective>(), Ok(SearchObjective::Balanced));
        assert!("quickest".parse::<SearchObjective>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let obj: SearchObjective = serde_json::from_str("\"balanced\"").unwrap();
        assert_eq!(obj, SearchObjective::Balanced);
        assert_eq!(
            serde_json::to_string(&SearchObjective::Fastest).unwrap(),
            "\"fastest\""
        );
    }

    #[test]
    fn default_is_cheapest() {
        assert_eq!(SearchObjective::default(), SearchObjective::Cheapest);
        assert_eq!(SearchObjective::default().to_string(), "cheapest");
    }
}
