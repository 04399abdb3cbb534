//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`VehicleId`]: store-assigned numeric identifier
//! - [`Price`]: fixed-point decimal price
//! - [`Address`], [`Location`]: coordinates and resolved address
//! - [`Details`]: opaque vehicle attributes
//! - [`Condition`]: new or used
//! - [`Timestamp`]: UTC point in time

pub mod address;
pub mod details;
pub mod enums;
pub mod ids;
pub mod location;
pub mod price;
pub mod timestamp;

pub use address::Address;
pub use details::Details;
pub use enums::Condition;
pub use ids::VehicleId;
pub use location::Location;
pub use price::Price;
pub use timestamp::Timestamp;
