//! # Address Value Object
//!
//! Street address resolved from a coordinate pair by the maps service.
//! Addresses are derived on every read and never stored.

use std::fmt;

/// A resolved street address.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::address::Address;
///
/// let address = Address::new("123 Main", "Springfield", "NY", "10001");
/// assert_eq!(address.to_string(), "123 Main, Springfield, NY 10001");
/// assert!(!address.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Street line.
    pub address: String,
    /// City name.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

impl Address {
    /// Creates a new address.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// Returns true if every component is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.address, &self.city, &self.state, &self.zip]
            .iter()
            .all(|part| part.trim().is_empty())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip
        )
    }
}
