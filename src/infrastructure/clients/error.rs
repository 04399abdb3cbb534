//! # Client Errors
//!
//! Error types for the remote pricing and maps contracts.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::infrastructure::clients::error::ClientError;
//!
//! let error = ClientError::timeout_with_duration("pricing", 2000);
//! assert!(error.is_unavailable());
//!
//! let error = ClientError::not_priced(24);
//! assert!(!error.is_unavailable());
//! ```

use thiserror::Error;

/// Error type for remote client operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Request timed out.
    #[error("{service} request timed out")]
    Timeout {
        /// Remote service name.
        service: String,
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Transport failure or server-side error.
    #[error("{service} unavailable: {message}")]
    Unavailable {
        /// Remote service name.
        service: String,
        /// Error message.
        message: String,
    },

    /// The pricing service has no price for this vehicle.
    #[error("no price available for vehicle {vehicle_id}")]
    NotPriced {
        /// The vehicle identifier that was looked up.
        vehicle_id: u64,
    },

    /// The maps service could not resolve the coordinates.
    #[error("location unresolved: {message}")]
    Unresolved {
        /// Error message.
        message: String,
    },

    /// Non-success status that is not a server error.
    #[error("{service} rejected request ({status}): {message}")]
    Rejected {
        /// Remote service name.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Response body or message.
        message: String,
    },

    /// Response did not match the contract.
    #[error("protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Client could not be constructed or used.
    #[error("client internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ClientError {
    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(service: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            service: service.into(),
            timeout_ms,
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a not priced error.
    #[must_use]
    pub fn not_priced(vehicle_id: u64) -> Self {
        Self::NotPriced { vehicle_id }
    }

    /// Creates an unresolved location error.
    #[must_use]
    pub fn unresolved(message: impl Into<String>) -> Self {
        Self::Unresolved {
            message: message.into(),
        }
    }

    /// Creates a rejected request error.
    #[must_use]
    pub fn rejected(service: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            service: service.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the remote side failed to answer.
    ///
    /// Timeouts and transport or server errors count as unavailable.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Unavailable { .. })
    }

    /// Returns true if the remote answered that it has no result.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NotPriced { .. } | Self::Unresolved { .. })
    }

    /// Returns true if the remote answered with the given status.
    #[must_use]
    pub fn has_status(&self, code: u16) -> bool {
        matches!(self, Self::Rejected { status, .. } if *status == code)
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
