//! # In-Memory Repositories
//!
//! In-memory implementations without database dependencies.
//!
//! - [`InMemoryVehicleRepository`]: vehicle persistence
//!
//! ## Thread Safety
//!
//! Implementations use `Arc<RwLock<..>>` for thread-safe access.

pub mod vehicle_repository;

pub use vehicle_repository::InMemoryVehicleRepository;
