//! # Persistence Layer
//!
//! Vehicle store port and its implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`VehicleRepository`]: CRUD over vehicle records
//!
//! ## Implementations
//!
//! - `in_memory`: in-memory store used by the service binary and tests

pub mod in_memory;
pub mod record;
pub mod traits;

pub use record::VehicleRecord;
pub use traits::{RepositoryError, RepositoryResult, VehicleRepository};
