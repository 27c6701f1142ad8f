//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A location without any description cannot be classified
    #[error("location description must not be empty")]
    EmptyLocation,

    /// Costs are never negative
    #[error("negative cost: {0}")]
    NegativeCost(String),
}
