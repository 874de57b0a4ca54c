//! Free-form postal address value object
//!
//! Addresses are passed to the geocoder as typed by the user. The only local
//! rule is that the text must not be blank.
//!
//! # Examples
//!
//! ```
//! use domain::Address;
//!
//! let address = Address::new("  Beijing Zoo ").unwrap();
//! assert_eq!(address.as_str(), "Beijing Zoo");
//!
//! assert!(Address::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-empty, user-supplied address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
}

impl Address {
    /// Create a new address from user input
    ///
    /// Surrounding whitespace is removed; inner text is kept as typed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyAddress`] if the trimmed input is empty.
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let raw = address.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyAddress);
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Address {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}
