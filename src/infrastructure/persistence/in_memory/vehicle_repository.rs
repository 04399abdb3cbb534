//! # In-Memory Vehicle Repository
//!
//! In-memory implementation of [`VehicleRepository`].
//!
//! Records are kept in an ordered map so listings come back sorted by
//! identifier. Identifiers are handed out from a counter starting at 1 and
//! are never reused, even after deletes.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::{Timestamp, VehicleId};
use crate::infrastructure::persistence::record::VehicleRecord;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, VehicleRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Storage {
    records: BTreeMap<VehicleId, VehicleRecord>,
    next_id: VehicleId,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: VehicleId::new(1),
        }
    }
}

/// In-memory implementation of [`VehicleRepository`].
///
/// Uses a thread-safe ordered map for storage. Cloning shares the
/// underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryVehicleRepository {
    /// Creates a new empty in-memory vehicle repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vehicles in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.records.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all vehicles from the repository.
    ///
    /// The identifier sequence is not reset.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.records.clear();
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle> {
        let mut storage = self.storage.write().await;
        let now = Timestamp::now();

        let (id, created_at) = match vehicle.id() {
            Some(id) => {
                let existing = storage
                    .records
                    .get(&id)
                    .ok_or_else(|| RepositoryError::not_found("Vehicle", id.to_string()))?;
                (id, existing.created_at)
            }
            None => (storage.next_id, now),
        };

        let record = VehicleRecord::from_vehicle(vehicle, id, created_at, now);
        let stored = record.to_vehicle()?;

        if id == storage.next_id {
            storage.next_id = id.next();
        }
        storage.records.insert(id, record);
        Ok(stored)
    }

    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>> {
        let storage = self.storage.read().await;
        storage
            .records
            .get(&id)
            .map(VehicleRecord::to_vehicle)
            .transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let storage = self.storage.read().await;
        storage
            .records
            .values()
            .map(VehicleRecord::to_vehicle)
            .collect()
    }

    async fn delete_by_id(&self, id: VehicleId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.records.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.records.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Address, Condition, Details, Location};

    fn create_test_vehicle(model: &str) -> Vehicle {
        Vehicle::new(
            Condition::Used,
            Details::new().with("model", model),
            Location::new(40.730610, -73.935242).unwrap(),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryVehicleRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryVehicleRepository::new();

        let first = repo.save(&create_test_vehicle("Impala")).await.unwrap();
        let second = repo.save(&create_test_vehicle("Malibu")).await.unwrap();

        assert_eq!(first.id(), Some(VehicleId::new(1)));
        assert_eq!(second.id(), Some(VehicleId::new(2)));
        assert!(first.created_at().is_some());
        assert_eq!(first.created_at(), first.modified_at());
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.save(&create_test_vehicle("Impala")).await.unwrap();
        let id = saved.id().unwrap();

        let retrieved = repo.find_by_id(id).await.unwrap();
        assert_eq!(retrieved, Some(saved));
    }

    #[tokio::test]
    async fn find_nonexistent_returns_none() {
        let repo = InMemoryVehicleRepository::new();
        let result = repo.find_by_id(VehicleId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_never_persists_derived_fields() {
        let repo = InMemoryVehicleRepository::new();
        let mut vehicle = create_test_vehicle("Impala");
        vehicle.enrich(
            "1500.00".parse().unwrap(),
            Address::new("123 Main", "Springfield", "NY", "10001"),
        );

        let saved = repo.save(&vehicle).await.unwrap();
        assert!(saved.price().is_none());
        assert!(saved.location().address().is_none());

        let reloaded = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
        assert!(!reloaded.is_enriched());
    }

    #[tokio::test]
    async fn replace_keeps_created_at() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.save(&create_test_vehicle("Impala")).await.unwrap();
        let id = saved.id().unwrap();

        let replacement = create_test_vehicle("Malibu")
            .with_id(id)
            .with_created_at(Timestamp::from_secs(0).unwrap());
        let replaced = repo.save(&replacement).await.unwrap();

        assert_eq!(replaced.id(), Some(id));
        assert_eq!(replaced.created_at(), saved.created_at());
        assert!(replaced.modified_at() >= saved.modified_at());
        assert_eq!(
            replaced.details().get("model").and_then(|v| v.as_str()),
            Some("Malibu")
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_not_found() {
        let repo = InMemoryVehicleRepository::new();
        let replacement = create_test_vehicle("Impala").with_id(VehicleId::new(7));

        let err = repo.save(&replacement).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn replace_after_delete_does_not_recreate() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.save(&create_test_vehicle("Impala")).await.unwrap();
        let id = saved.id().unwrap();
        assert!(repo.delete_by_id(id).await.unwrap());

        let err = repo.save(&saved).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryVehicleRepository::new();
        for model in ["a", "b", "c"] {
            repo.save(&create_test_vehicle(model)).await.unwrap();
        }

        let ids: Vec<u64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .filter_map(|v| v.id().map(VehicleId::get))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.save(&create_test_vehicle("Impala")).await.unwrap();
        let id = saved.id().unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryVehicleRepository::new();
        let first = repo.save(&create_test_vehicle("a")).await.unwrap();
        repo.delete_by_id(first.id().unwrap()).await.unwrap();

        let second = repo.save(&create_test_vehicle("b")).await.unwrap();
        assert_eq!(second.id(), Some(VehicleId::new(2)));
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryVehicleRepository::new();
        repo.save(&create_test_vehicle("a")).await.unwrap();
        repo.save(&create_test_vehicle("b")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
