//! # Identity Value Objects
//!
//! Type-safe identity wrapper for stored vehicles.
//!
//! Vehicle identifiers are assigned by the store from a monotonically
//! increasing sequence and never change once set.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle identifier.
///
/// A numeric identifier assigned by the vehicle store on first save.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::ids::VehicleId;
///
/// let id: VehicleId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
///
/// assert!("abc".parse::<VehicleId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    /// Creates a vehicle ID from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for VehicleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId(format!("not a vehicle id: {s}")))
    }
}
