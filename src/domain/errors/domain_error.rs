//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level validation failures with numeric error codes.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidPrice("price cannot be negative".to_string());
//! assert_eq!(error.code(), 1001);
//! ```

use thiserror::Error;

/// Domain-level error with numeric error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid price value.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Latitude or longitude outside the valid range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Details payload is not an attribute object.
    #[error("invalid details: {0}")]
    InvalidDetails(String),

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Returns the numeric error code.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidPrice(_) => 1001,
            Self::InvalidCoordinates(_) => 1002,
            Self::InvalidDetails(_) => 1003,
            Self::InvalidId(_) => 1004,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        (1000..2000).contains(&self.code())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
