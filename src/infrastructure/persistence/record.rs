//! # Persistence Mapping
//!
//! The stored shape of a vehicle.
//!
//! [`VehicleRecord`] has no price and no address fields. Mapping a
//! [`Vehicle`] into a record drops its derived attributes, and mapping a
//! record back yields a vehicle with both unset, so enrichment results can
//! never be written to or read from a store.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::{Condition, Details, Location, Timestamp, VehicleId};
use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};

/// Persisted representation of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Identifier.
    pub id: VehicleId,
    /// Condition.
    pub condition: Condition,
    /// Descriptive attributes.
    pub details: Details,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// First persistence time.
    pub created_at: Timestamp,
    /// Last persistence time.
    pub modified_at: Timestamp,
}

impl VehicleRecord {
    /// Builds a record from a vehicle and the identity assigned by the store.
    #[must_use]
    pub fn from_vehicle(
        vehicle: &Vehicle,
        id: VehicleId,
        created_at: Timestamp,
        modified_at: Timestamp,
    ) -> Self {
        Self {
            id,
            condition: vehicle.condition(),
            details: vehicle.details().clone(),
            lat: vehicle.location().lat(),
            lon: vehicle.location().lon(),
            created_at,
            modified_at,
        }
    }

    /// Converts the record back into an unenriched vehicle.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if the stored coordinates
    /// are no longer valid.
    pub fn to_vehicle(&self) -> RepositoryResult<Vehicle> {
        let location = Location::new(self.lat, self.lon).map_err(|e| {
            RepositoryError::serialization(format!("vehicle {}: {}", self.id, e))
        })?;
        Ok(Vehicle::from_parts(
            self.id,
            self.condition,
            self.details.clone(),
            location,
            self.created_at,
            self.modified_at,
        ))
    }
}
