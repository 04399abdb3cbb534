//! # Vehicle Entity
//!
//! A stored vehicle record and its read-time view.
//!
//! A [`Vehicle`] carries durable attributes (identifier, condition, details,
//! coordinates, timestamps) and two derived attributes that only exist on
//! the read path: the current price and the resolved address. The derived
//! attributes are attached by [`Vehicle::enrich`] and are never part of the
//! writable surface.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::entities::vehicle::Vehicle;
//! use vehicles_api::domain::value_objects::{Address, Condition, Details, Location};
//!
//! let mut vehicle = Vehicle::new(
//!     Condition::Used,
//!     Details::new().with("model", "Impala"),
//!     Location::new(40.0, -74.0).unwrap(),
//! );
//! assert!(vehicle.id().is_none());
//! assert!(!vehicle.is_enriched());
//!
//! vehicle.enrich(
//!     "1500.00".parse().unwrap(),
//!     Address::new("123 Main", "Springfield", "NY", "10001"),
//! );
//! assert!(vehicle.is_enriched());
//! ```

use crate::domain::value_objects::{
    Address, Condition, Details, Location, Price, Timestamp, VehicleId,
};
use std::fmt;

/// A vehicle record.
///
/// # Invariants
///
/// - `id` and `created_at` are set by the store and never change afterwards
/// - `price` and the location's address are only set by enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: Option<VehicleId>,
    condition: Condition,
    details: Details,
    location: Location,
    price: Option<Price>,
    created_at: Option<Timestamp>,
    modified_at: Option<Timestamp>,
}

impl Vehicle {
    /// Creates a new, not yet persisted vehicle.
    #[must_use]
    pub fn new(condition: Condition, details: Details, location: Location) -> Self {
        Self {
            id: None,
            condition,
            details,
            location: location.coordinates_only(),
            price: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Reconstructs a vehicle from stored parts.
    ///
    /// The result carries no price and no address.
    #[must_use]
    pub fn from_parts(
        id: VehicleId,
        condition: Condition,
        details: Details,
        location: Location,
        created_at: Timestamp,
        modified_at: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            condition,
            details,
            location: location.coordinates_only(),
            price: None,
            created_at: Some(created_at),
            modified_at: Some(modified_at),
        }
    }

    /// Sets the identifier, returning the updated vehicle.
    ///
    /// Used to target an existing record on update.
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the creation timestamp, returning the updated vehicle.
    #[must_use]
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the identifier, if the vehicle has been stored.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<VehicleId> {
        self.id
    }

    /// Returns the condition.
    #[inline]
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the descriptive attributes.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Returns the location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the price attached by enrichment.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    /// Returns the creation timestamp.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[inline]
    #[must_use]
    pub fn modified_at(&self) -> Option<Timestamp> {
        self.modified_at
    }

    /// Returns true if both price and address are attached.
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.price.is_some() && self.location.address().is_some()
    }

    /// Attaches the read-time price and address.
    pub fn enrich(&mut self, price: Price, address: Address) {
        self.price = Some(price);
        self.location.set_address(address);
    }

    /// Replaces the writable attributes with those of `changes`.
    ///
    /// Identifier, timestamps and derived attributes are left untouched.
    pub fn apply_changes(&mut self, changes: &Vehicle) {
        self.condition = changes.condition;
        self.details = changes.details.clone();
        self.location = changes.location.coordinates_only();
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "Vehicle({id}, {}, lat={}, lon={})",
                self.condition,
                self.location.lat(),
                self.location.lon()
            ),
            None => write!(
                f,
                "Vehicle(unsaved, {}, lat={}, lon={})",
                self.condition,
                self.location.lat(),
                self.location.lon()
            ),
        }
    }
}
