//! Textual coordinate value object
//!
//! A coordinate is the `"<longitude>,<latitude>"` text produced by the
//! geocoder and consumed unchanged by the directions endpoint. It is never
//! parsed into numbers or re-formatted, so precision and notation survive the
//! round trip exactly.
//!
//! # Examples
//!
//! ```
//! use domain::Coordinate;
//!
//! let coord = Coordinate::new("116.480881,39.989410").unwrap();
//! assert_eq!(coord.as_str(), "116.480881,39.989410");
//! assert_eq!(coord.longitude(), Some("116.480881"));
//! assert_eq!(coord.latitude(), Some("39.989410"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A `"longitude,latitude"` pair kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    value: String,
}

impl Coordinate {
    /// Wrap coordinate text as returned by the service
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCoordinate`] if the text is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyCoordinate);
        }
        Ok(Self { value })
    }

    /// Get the coordinate text exactly as received
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Longitude half of the pair, if the text contains a comma
    pub fn longitude(&self) -> Option<&str> {
        self.value.split_once(',').map(|(lon, _)| lon)
    }

    /// Latitude half of the pair, if the text contains a comma
    pub fn latitude(&self) -> Option<&str> {
        self.value.split_once(',').map(|(_, lat)| lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Coordinate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_kept_verbatim() {
        let coord = Coordinate::new("116.1,39.9").unwrap();
        assert_eq!(coord.as_str(), "116.1,39.9");
        assert_eq!(coord.to_string(), "116.1,39.9");
    }

    #[test]
    fn trailing_zeros_are_not_normalized() {
        let coord = Coordinate::new("116.480000,39.900000").unwrap();
        assert_eq!(coord.as_str(), "116.480000,39.900000");
    }

    #[test]
    fn halves_are_split_on_comma() {
        let coord = Coordinate::new("116.2,39.8").unwrap();
        assert_eq!(coord.longitude(), Some("116.2"));
        assert_eq!(coord.latitude(), Some("39.8"));
    }

    #[test]
    fn text_without_comma_has_no_halves() {
        let coord = Coordinate::new("garbage").unwrap();
        assert_eq!(coord.longitude(), None);
        assert_eq!(coord.latitude(), None);
        assert_eq!(coord.as_str(), "garbage");
    }

    #[test]
    fn blank_coordinate_is_rejected() {
        assert!(matches!(Coordinate::new(""), Err(DomainError::EmptyCoordinate)));
        assert!(matches!(Coordinate::new(" "), Err(DomainError::EmptyCoordinate)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let coord = Coordinate::new("116.1,39.9").unwrap();
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#""116.1,39.9""#);
    }
}
