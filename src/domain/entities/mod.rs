//! # Domain Entities
//!
//! - [`Vehicle`]: stored vehicle record with read-time price and address

pub mod vehicle;

pub use vehicle::Vehicle;
