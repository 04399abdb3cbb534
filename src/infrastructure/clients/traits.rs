//! # Remote Lookup Traits
//!
//! Port definitions for the two downstream services a vehicle read
//! depends on.
//!
//! - [`PriceLookup`]: price by vehicle identifier
//! - [`LocationResolver`]: street address by coordinates
//!
//! Implementations own request construction and response decoding only.
//! They never retry and never swallow errors.
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::infrastructure::clients::traits::PriceLookup;
//!
//! struct FixedPrice;
//!
//! #[async_trait::async_trait]
//! impl PriceLookup for FixedPrice {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::value_objects::{Address, Price, VehicleId};
use crate::infrastructure::clients::error::ClientResult;
use async_trait::async_trait;
use std::fmt;

/// Looks up the current price of a vehicle.
#[async_trait]
pub trait PriceLookup: Send + Sync + fmt::Debug {
    /// Returns the remote service name, used in logs and errors.
    fn service_name(&self) -> &str;

    /// Looks up the price for `vehicle_id`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotPriced` if the remote has no price for this
    /// identifier, or an unavailable-class error if it failed to answer.
    async fn lookup(&self, vehicle_id: VehicleId) -> ClientResult<Price>;
}

/// Resolves coordinates to a street address.
#[async_trait]
pub trait LocationResolver: Send + Sync + fmt::Debug {
    /// Returns the remote service name, used in logs and errors.
    fn service_name(&self) -> &str;

    /// Resolves `(lat, lon)` to an address.
    ///
    /// Coordinates are passed through unmodified.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unresolved` if the remote has no address for
    /// the coordinates, or an unavailable-class error if it failed to answer.
    async fn resolve(&self, lat: f64, lon: f64) -> ClientResult<Address>;
}
