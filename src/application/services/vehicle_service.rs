//! # Vehicle Service
//!
//! Orchestrates the vehicle store and the two remote lookups.
//!
//! Reads through [`VehicleService::get`] load the stored record and then
//! query the pricing and maps services concurrently. Each lookup is bounded
//! by its own timeout and the join is fail-fast: the first failure cancels
//! the sibling lookup and the whole read fails. Price and address are never
//! written back to the store.
//!
//! Writes only touch the store.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::clients::{ClientError, ClientResult, LocationResolver, PriceLookup};
use crate::infrastructure::persistence::{RepositoryError, VehicleRepository};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Timeouts applied to the remote lookups of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentConfig {
    /// Price lookup timeout in milliseconds.
    pub price_timeout_ms: u64,
    /// Address lookup timeout in milliseconds.
    pub location_timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            price_timeout_ms: 5000,
            location_timeout_ms: 5000,
        }
    }
}

impl EnrichmentConfig {
    /// Creates a configuration using the same timeout for both lookups.
    #[must_use]
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            price_timeout_ms: timeout_ms,
            location_timeout_ms: timeout_ms,
        }
    }

    /// Sets the price lookup timeout.
    #[must_use]
    pub fn with_price_timeout(mut self, timeout_ms: u64) -> Self {
        self.price_timeout_ms = timeout_ms;
        self
    }

    /// Sets the address lookup timeout.
    #[must_use]
    pub fn with_location_timeout(mut self, timeout_ms: u64) -> Self {
        self.location_timeout_ms = timeout_ms;
        self
    }
}

/// Vehicle use cases over the store and the remote lookups.
#[derive(Debug)]
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
    pricing: Arc<dyn PriceLookup>,
    maps: Arc<dyn LocationResolver>,
    config: EnrichmentConfig,
}

impl VehicleService {
    /// Creates a new VehicleService.
    #[must_use]
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        pricing: Arc<dyn PriceLookup>,
        maps: Arc<dyn LocationResolver>,
        config: EnrichmentConfig,
    ) -> Self {
        Self {
            repository,
            pricing,
            maps,
            config,
        }
    }

    /// Creates a new service with default timeouts.
    #[must_use]
    pub fn with_defaults(
        repository: Arc<dyn VehicleRepository>,
        pricing: Arc<dyn PriceLookup>,
        maps: Arc<dyn LocationResolver>,
    ) -> Self {
        Self::new(repository, pricing, maps, EnrichmentConfig::default())
    }

    /// Lists all stored vehicles, ordered by identifier.
    ///
    /// Listed vehicles are not enriched.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store fails.
    pub async fn list(&self) -> ApplicationResult<Vec<Vehicle>> {
        let vehicles = self
            .repository
            .find_all()
            .await
            .map_err(repository_failure)?;
        debug!(count = vehicles.len(), "listed vehicles");
        Ok(vehicles)
    }

    /// Loads a vehicle and attaches its current price and address.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if no vehicle has this identifier
    /// - `ApplicationError::EnrichmentFailed` if either lookup fails, times
    ///   out or comes back empty
    /// - `ApplicationError::Repository` if the store fails
    pub async fn get(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        let mut vehicle = self.find_existing(id).await?;

        let lat = vehicle.location().lat();
        let lon = vehicle.location().lon();
        let price = bounded(
            self.pricing.service_name(),
            self.config.price_timeout_ms,
            self.pricing.lookup(id),
        );
        let address = bounded(
            self.maps.service_name(),
            self.config.location_timeout_ms,
            self.maps.resolve(lat, lon),
        );

        let (price, address) = tokio::try_join!(price, address).map_err(|e| {
            warn!(
                vehicle_id = %id,
                error = %e,
                unavailable = e.is_unavailable(),
                empty = e.is_empty_result(),
                "enrichment failed"
            );
            ApplicationError::enrichment_failed(id, e.to_string())
        })?;

        vehicle.enrich(price, address);
        Ok(vehicle)
    }

    /// Stores a new vehicle.
    ///
    /// Any identifier or timestamps on `vehicle` are ignored. The stored
    /// vehicle is returned without price or address.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store fails.
    pub async fn create(&self, vehicle: Vehicle) -> ApplicationResult<Vehicle> {
        let fresh = Vehicle::new(
            vehicle.condition(),
            vehicle.details().clone(),
            vehicle.location().clone(),
        );
        let stored = self
            .repository
            .save(&fresh)
            .await
            .map_err(repository_failure)?;
        info!(vehicle_id = ?stored.id(), "vehicle created");
        Ok(stored)
    }

    /// Replaces the condition, details and location of a stored vehicle.
    ///
    /// Identifier and creation timestamp are kept. A vehicle deleted while
    /// the update is in flight stays deleted.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if `vehicle` has no identifier
    /// - `ApplicationError::NotFound` if no vehicle has this identifier
    /// - `ApplicationError::Repository` if the store fails
    pub async fn update(&self, vehicle: Vehicle) -> ApplicationResult<Vehicle> {
        let id = vehicle
            .id()
            .ok_or_else(|| ApplicationError::validation("vehicle id is required for update"))?;

        let mut existing = self.find_existing(id).await?;
        existing.apply_changes(&vehicle);

        let stored = self.repository.save(&existing).await.map_err(|e| {
            if e.is_not_found() {
                ApplicationError::vehicle_not_found(id)
            } else {
                repository_failure(e)
            }
        })?;
        info!(vehicle_id = %id, "vehicle updated");
        Ok(stored)
    }

    /// Deletes a stored vehicle.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if no vehicle has this identifier
    /// - `ApplicationError::Repository` if the store fails
    pub async fn delete(&self, id: VehicleId) -> ApplicationResult<()> {
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(repository_failure)?;
        if !removed {
            return Err(ApplicationError::vehicle_not_found(id));
        }
        info!(vehicle_id = %id, "vehicle deleted");
        Ok(())
    }

    async fn find_existing(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(repository_failure)?
            .ok_or_else(|| ApplicationError::vehicle_not_found(id))
    }
}

/// Runs a remote lookup under `timeout_ms`.
async fn bounded<T>(
    service: &str,
    timeout_ms: u64,
    lookup: impl Future<Output = ClientResult<T>>,
) -> ClientResult<T> {
    match timeout(Duration::from_millis(timeout_ms), lookup).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::timeout_with_duration(service, timeout_ms)),
    }
}

fn repository_failure(err: RepositoryError) -> ApplicationError {
    error!(error = %err, "repository operation failed");
    ApplicationError::from(err)
}
