//! # Remote Clients
//!
//! Adapters for the downstream services consulted when a vehicle is read.

pub mod error;
pub mod http_client;
pub mod maps;
pub mod pricing;
pub mod traits;


pub use error::{ClientError, ClientResult};
pub use maps::MapsClient;
pub use pricing::PricingClient;
pub use traits::{LocationResolver, PriceLookup};
