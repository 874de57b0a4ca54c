//! Navigation error types

use thiserror::Error;

/// Coarse classification of a [`NavigationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The geocoder answered but did not resolve the address
    GeocodingFailed,
    /// The geocoding exchange itself broke down
    GeocodingException,
    /// The directions service answered with a failure status
    RouteFetchFailed,
    /// The directions exchange itself broke down
    RouteFetchException,
    /// The client could not be set up
    Configuration,
}

/// Errors that can occur during geocoding and route retrieval
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Geocoder returned a non-success status or no results
    #[error("Geocoding failed for '{address}': {info} (response: {body})")]
    GeocodingFailed {
        /// The address that could not be resolved
        address: String,
        /// Service-provided reason, e.g. `INVALID_USER_KEY`
        info: String,
        /// Raw response body
        body: String,
    },

    /// Transport, HTTP, or decoding failure while geocoding
    #[error("Geocoding exception for '{address}': {reason}")]
    GeocodingException {
        /// The address being resolved
        address: String,
        /// Underlying error
        reason: String,
    },

    /// Directions service returned a non-success status
    #[error("Route fetch failed: {info} (response: {body})")]
    RouteFetchFailed {
        /// Service-provided reason
        info: String,
        /// Raw response body
        body: String,
    },

    /// Transport, HTTP, or decoding failure while fetching a route
    #[error("Route fetch exception: {reason}")]
    RouteFetchException {
        /// Underlying error
        reason: String,
    },

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl NavigationError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::GeocodingFailed { .. } => FailureKind::GeocodingFailed,
            Self::GeocodingException { .. } => FailureKind::GeocodingException,
            Self::RouteFetchFailed { .. } => FailureKind::RouteFetchFailed,
            Self::RouteFetchException { .. } => FailureKind::RouteFetchException,
            Self::Configuration(_) => FailureKind::Configuration,
        }
    }
}
