//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Value validation failures
//! ├── Repository(RepositoryError)  - Store failures
//! ├── Validation(String)           - Request validation failures
//! ├── NotFound                     - Unknown vehicle
//! └── EnrichmentFailed             - Price or address lookup failed
//! ```
//!
//! Enrichment failures keep only a human-readable reason. The kind of the
//! downstream failure is logged where it happens and not carried upward.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::application::error::ApplicationError;
//! use vehicles_api::domain::value_objects::VehicleId;
//!
//! let err = ApplicationError::vehicle_not_found(VehicleId::new(7));
//! assert!(err.is_not_found());
//!
//! let err = ApplicationError::enrichment_failed(VehicleId::new(7), "pricing timed out");
//! assert!(err.is_not_found_class());
//! assert!(!err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from value validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// A remote lookup needed to complete a read failed.
    #[error("enrichment failed for vehicle {vehicle_id}: {reason}")]
    EnrichmentFailed {
        /// Vehicle being read.
        vehicle_id: VehicleId,
        /// Human-readable reason.
        reason: String,
    },
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a not found error for a vehicle.
    #[must_use]
    pub fn vehicle_not_found(id: VehicleId) -> Self {
        Self::not_found("Vehicle", id.to_string())
    }

    /// Creates an enrichment failure.
    #[must_use]
    pub fn enrichment_failed(vehicle_id: VehicleId, reason: impl Into<String>) -> Self {
        Self::EnrichmentFailed {
            vehicle_id,
            reason: reason.into(),
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if callers should see this as "no such vehicle".
    ///
    /// Enrichment failures are reported the same way as unknown vehicles.
    #[must_use]
    pub fn is_not_found_class(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::EnrichmentFailed { .. })
    }

    /// Returns true if this is a client-side validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_validation_error(),
            _ => false,
        }
    }

    /// Returns true if this is an enrichment failure.
    #[must_use]
    pub fn is_enrichment_failure(&self) -> bool {
        matches!(self, Self::EnrichmentFailed { .. })
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_not_found() {
        let err = ApplicationError::vehicle_not_found(VehicleId::new(42));
        assert!(err.is_not_found());
        assert!(err.is_not_found_class());
        assert_eq!(err.to_string(), "not found: Vehicle with id 42");
    }

    #[test]
    fn enrichment_failed_is_not_found_class() {
        let err = ApplicationError::enrichment_failed(VehicleId::new(24), "pricing unavailable");
        assert!(!err.is_not_found());
        assert!(err.is_not_found_class());
        assert!(err.is_enrichment_failure());
        assert!(err.to_string().contains("24"));
        assert!(err.to_string().contains("pricing unavailable"));
    }

    #[test]
    fn validation() {
        let err = ApplicationError::validation("id required");
        assert!(err.is_validation());
        assert!(!err.is_not_found_class());
    }

    #[test]
    fn domain_validation_is_validation() {
        let err: ApplicationError = DomainError::InvalidCoordinates("lat".to_string()).into();
        assert!(err.is_validation());
    }

    #[test]
    fn repository_error_converts() {
        let err: ApplicationError = RepositoryError::serialization("corrupt record").into();
        assert!(matches!(err, ApplicationError::Repository(_)));
        assert!(!err.is_validation());
        assert!(!err.is_not_found_class());
    }
}
