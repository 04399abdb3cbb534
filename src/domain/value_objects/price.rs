//! # Price Value Object
//!
//! Fixed-point decimal price.
//!
//! This module provides the [`Price`] type, a wrapper around [`Decimal`]
//! for the monetary amount reported by the pricing service. Prices are
//! currency-agnostic and keep the scale they were received with, so
//! `"1500.00"` renders back as `"1500.00"`.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::value_objects::price::Price;
//!
//! let price: Price = "1500.00".parse().unwrap();
//! assert_eq!(price.to_string(), "1500.00");
//! assert!("-1".parse::<Price>().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, non-negative price.
///
/// # Invariants
///
/// - Price is always >= 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a new price from a Decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidPrice(format!(
                "price cannot be negative: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the inner Decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::InvalidPrice(format!("{s}: {e}")))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
