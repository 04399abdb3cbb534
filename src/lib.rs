//! # Vehicles API
//!
//! Vehicle record service that attaches a live price and a resolved street
//! address to stored vehicles on every read.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Vehicle entity and value objects
//! - **Application Layer** (`application`): Vehicle service and read-time enrichment
//! - **Infrastructure Layer** (`infrastructure`): Vehicle store and pricing/maps clients
//! - **API Layer** (`api`): REST interface
//!
//! ## Example
//!
//! ```rust,ignore
//! use vehicles_api::application::services::VehicleService;
//! use vehicles_api::domain::value_objects::VehicleId;
//!
//! let service = VehicleService::with_defaults(repository, pricing, maps);
//! let vehicle = service.get(VehicleId::new(1)).await?;
//! println!("{} costs {:?}", vehicle, vehicle.price());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
