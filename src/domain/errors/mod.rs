//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::errors::{DomainError, DomainResult};
//!
//! fn validate_latitude(lat: f64) -> DomainResult<f64> {
//!     if !(-90.0..=90.0).contains(&lat) {
//!         return Err(DomainError::InvalidCoordinates(format!("latitude {lat} out of range")));
//!     }
//!     Ok(lat)
//! }
//!
//! assert!(validate_latitude(91.0).is_err());
//! ```

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
