//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`VehicleService`]: vehicle CRUD with read-time enrichment

pub mod vehicle_service;

pub use vehicle_service::{EnrichmentConfig, VehicleService};
