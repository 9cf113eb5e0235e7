//! Payer address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::clean;
use crate::error::DomainError;

/// A Brazilian postal address.
///
/// Immutable once constructed: the state code is normalized to uppercase and
/// the zip code to its 8 bare digits at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// The state code must have exactly 2 characters and the zip code must
    /// contain exactly 8 digits once formatting punctuation is stripped.
    pub fn new(
        street: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let state = state.into();
        if state.chars().count() != 2 {
            return Err(DomainError::InvalidState(state));
        }

        let zip_code = zip_code.into();
        let digits = clean(&zip_code);
        if digits.len() != 8 {
            return Err(DomainError::InvalidZipCode(zip_code));
        }

        Ok(Self {
            street: street.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.to_uppercase(),
            zip_code: digits,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Two-letter state code, uppercased.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Zip code as 8 bare digits.
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} - {}, {}",
            self.street, self.neighborhood, self.city, self.state, self.zip_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Result<Address, DomainError> {
        Address::new("Rua das Flores, 123", "Centro", "São Paulo", "sp", "01310-100")
    }

    #[test]
    fn test_address_normalizes_state_and_zip() {
        let addr = sample().unwrap();
        assert_eq!(addr.state(), "SP");
        assert_eq!(addr.zip_code(), "01310100");
    }

    #[test]
    fn test_invalid_state_rejected() {
        let result = Address::new("Rua A", "Centro", "São Paulo", "SPX", "01310-100");
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_invalid_zip_rejected() {
        let result = Address::new("Rua A", "Centro", "São Paulo", "SP", "1310-100");
        assert!(matches!(result, Err(DomainError::InvalidZipCode(_))));
    }

    #[test]
    fn test_display() {
        let addr = sample().unwrap();
        assert_eq!(
            addr.to_string(),
            "Rua das Flores, 123, Centro, São Paulo - SP, 01310100"
        );
    }
}
