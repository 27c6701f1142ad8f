//! Resolved locations.

use super::DomainError;

/// A place chosen by the user from address resolution.
///
/// The `place_id` is opaque to us; only the description is used for
/// airport classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    place_id: String,
    description: String,
}

impl Location {
    /// Creates a location. The description must contain something other
    /// than whitespace.
    pub fn new(
        place_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::EmptyLocation);
        }

        Ok(Self {
            place_id: place_id.into(),
            description,
        })
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
