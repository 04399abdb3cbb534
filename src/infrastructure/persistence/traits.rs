//! # Repository Traits
//!
//! Port definitions for vehicle persistence.
//!
//! The store is a plain CRUD boundary keyed by [`VehicleId`]. It knows
//! nothing about prices or addresses: those are derived on read by the
//! application layer and never reach a repository.
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::infrastructure::persistence::traits::VehicleRepository;
//!
//! async fn count_vehicles(repo: &impl VehicleRepository) {
//!     let all = repo.find_all().await.unwrap();
//!     println!("Found {} vehicles", all.len());
//! }
//! ```

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for vehicle records.
#[async_trait]
pub trait VehicleRepository: Send + Sync + fmt::Debug {
    /// Saves a vehicle (insert-or-replace).
    ///
    /// A vehicle without an identifier is inserted under the next free
    /// identifier. A vehicle with an identifier replaces the stored record;
    /// the stored creation timestamp is kept. The modification timestamp is
    /// refreshed either way.
    ///
    /// The existence check and the replace happen as one step, so a record
    /// deleted concurrently is never brought back.
    ///
    /// Returns the stored record, without price or address.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the vehicle carries an
    /// identifier that is not stored.
    async fn save(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle>;

    /// Finds a vehicle by ID.
    ///
    /// Returns `None` if the vehicle does not exist.
    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>>;

    /// Returns all vehicles ordered by identifier.
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Deletes a vehicle by ID.
    ///
    /// Returns `Ok(true)` if the vehicle was deleted, `Ok(false)` if it didn't exist.
    async fn delete_by_id(&self, id: VehicleId) -> RepositoryResult<bool>;

    /// Counts all vehicles.
    async fn count(&self) -> RepositoryResult<u64>;
}
