//! # Location Value Object
//!
//! Coordinates of a vehicle plus its read-time resolved address.
//!
//! Only latitude and longitude are persisted. The address block is attached
//! by the enrichment step and is dropped whenever the vehicle is stored.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::address::Address;

/// Vehicle location.
///
/// # Invariants
///
/// - `lat` is finite and within [-90, 90]
/// - `lon` is finite and within [-180, 180]
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::location::Location;
///
/// let location = Location::new(40.0, -74.0).unwrap();
/// assert!(location.address().is_none());
///
/// assert!(Location::new(91.0, 0.0).is_err());
/// assert!(Location::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    lat: f64,
    lon: f64,
    address: Option<Address>,
}

impl Location {
    /// Creates a location from validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either coordinate is
    /// not finite or lies outside its range.
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude must be within [-90, 90], got {lat}"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude must be within [-180, 180], got {lon}"
            )));
        }
        Ok(Self {
            lat,
            lon,
            address: None,
        })
    }

    /// Returns the latitude.
    #[inline]
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude.
    #[inline]
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns the resolved address, if enrichment has run.
    #[inline]
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Attaches a resolved address.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Returns the coordinates without the derived address.
    #[must_use]
    pub fn coordinates_only(&self) -> Self {
        Self {
            lat: self.lat,
            lon: self.lon,
            address: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinates_only_drops_address() {
        let mut location = Location::new(40.0, -74.0).unwrap();
        location.set_address(Address::new("123 Main", "Springfield", "NY", "10001"));
        assert!(location.address().is_some());

        let stripped = location.coordinates_only();
        assert!(stripped.address().is_none());
        assert_eq!(stripped.lat(), 40.0);
        assert_eq!(stripped.lon(), -74.0);
    }

    proptest! {
        #[test]
        fn in_range_coordinates_accepted(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let location = Location::new(lat, lon).unwrap();
            prop_assert_eq!(location.lat(), lat);
            prop_assert_eq!(location.lon(), lon);
        }

        #[test]
        fn out_of_range_latitude_rejected(lat in 90.0001f64..1.0e6, sign in any::<bool>()) {
            let lat = if sign { lat } else { -lat };
            prop_assert!(Location::new(lat, 0.0).is_err());
        }

        #[test]
        fn out_of_range_longitude_rejected(lon in 180.0001f64..1.0e6, sign in any::<bool>()) {
            let lon = if sign { lon } else { -lon };
            prop_assert!(Location::new(0.0, lon).is_err());
        }
    }
}
