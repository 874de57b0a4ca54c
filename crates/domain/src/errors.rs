//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Address text was empty or whitespace only
    #[error("Address must not be empty")]
    EmptyAddress,

    /// Coordinate text was empty or whitespace only
    #[error("Coordinate must not be empty")]
    EmptyCoordinate,
}
