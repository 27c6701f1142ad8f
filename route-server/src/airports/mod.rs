//! Candidate airports for a location.
//!
//! Classification is keyword-based over the location's description: the
//! first rule whose keyword appears in the description wins, and a fallback
//! list covers everything else. The result is never empty.

use crate::domain::{AirportCode, Location};

/// Maps a location to airports worth flying from/to, most relevant first.
///
/// Implementations must be deterministic and must never return an empty
/// list for a valid location.
pub trait AirportFinder: Send + Sync {
    fn find(&self, location: &Location) -> Vec<AirportCode>;
}

/// Airports used when a builder is given no usable fallback.
const DEFAULT_FALLBACK: [&str; 3] = ["BOS", "JFK", "ORD"];

/// One keyword rule: any keyword match yields `airports`.
#[derive(Debug, Clone)]
struct AirportRule {
    keywords: Vec<String>,
    airports: Vec<AirportCode>,
}

/// Keyword table finder.
#[derive(Debug, Clone)]
pub struct KeywordAirportFinder {
    rules: Vec<AirportRule>,
    fallback: Vec<AirportCode>,
}

impl KeywordAirportFinder {
    /// Number of keyword rules (not counting the fallback).
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The list returned when no rule matches.
    pub fn fallback(&self) -> &[AirportCode] {
        &self.fallback
    }
}

impl AirportFinder for KeywordAirportFinder {
    fn find(&self, location: &Location) -> Vec<AirportCode> {
        let description = location.description().to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| description.contains(k)))
            .map(|rule| rule.airports.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Builder for a keyword table.
///
/// Invalid airport codes and blank keywords are dropped; a rule left with
/// no airports or no keywords is dropped entirely.
#[derive(Debug, Default)]
pub struct KeywordAirportFinderBuilder {
    rules: Vec<AirportRule>,
    fallback: Vec<AirportCode>,
}

impl KeywordAirportFinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Keywords are matched case-insensitively as substrings.
    pub fn rule(mut self, keywords: &[&str], airports: &[&str]) -> Self {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        let airports = parse_codes(airports);

        if !keywords.is_empty() && !airports.is_empty() {
            self.rules.push(AirportRule { keywords, airports });
        }
        self
    }

    /// Set the airports returned when nothing matches.
    pub fn fallback(mut self, airports: &[&str]) -> Self {
        self.fallback = parse_codes(airports);
        self
    }

    pub fn build(self) -> KeywordAirportFinder {
        let fallback = if self.fallback.is_empty() {
            parse_codes(&DEFAULT_FALLBACK)
        } else {
            self.fallback
        };

        KeywordAirportFinder {
            rules: self.rules,
            fallback,
        }
    }
}

fn parse_codes(codes: &[&str]) -> Vec<AirportCode> {
    codes
        .iter()
        .filter_map(|c| AirportCode::parse_normalized(c).ok())
        .collect()
}

/// The default table of US metro areas.
pub fn us_airports() -> KeywordAirportFinder {
    KeywordAirportFinderBuilder::new()
        .rule(&["boston"], &["BOS", "PVD", "MHT"])
        .rule(&["providence"], &["PVD", "BOS"])
        .rule(&["new york"], &["JFK", "LGA", "EWR"])
        .rule(&["kentucky", "louisville"], &["SDF", "CVG"])
        .fallback(&DEFAULT_FALLBACK)
        .build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_empty(description in "[ -~]{1,60}") {
            prop_assume!(!description.trim().is_empty());
            let location = Location::new("p", description).unwrap();
            prop_assert!(!us_airports().find(&location).is_empty());
        }
    }
}
