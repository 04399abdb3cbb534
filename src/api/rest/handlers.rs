//! # REST Handlers
//!
//! Request handlers for REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /vehicles` - List stored vehicles (not enriched)
//! - `GET /vehicles/{id}` - Get a vehicle with its current price and address
//! - `POST /vehicles` - Create a vehicle
//! - `PUT /vehicles/{id}` - Replace condition, details and location
//! - `DELETE /vehicles/{id}` - Delete a vehicle
//! - `GET /health` - Liveness

use crate::application::error::ApplicationError;
use crate::application::services::VehicleService;
use crate::domain::entities::Vehicle;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Condition, Details, Location, Price, Timestamp, VehicleId};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Vehicle use cases.
    pub service: Arc<VehicleService>,
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApplicationError) -> Self {
        let (status, code) = match &err {
            ApplicationError::Validation(_) | ApplicationError::Domain(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            // Enrichment failures are reported as a missing vehicle.
            ApplicationError::NotFound { .. } | ApplicationError::EnrichmentFailed { .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            ApplicationError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        (status, Json(ErrorResponse::new(code, err.to_string())))
    }
}

// ============================================================================
// Vehicle DTOs
// ============================================================================

/// Coordinates of a vehicle in a request body.
///
/// Address fields sent by clients are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Request body for creating or updating a vehicle.
///
/// `id`, `price`, `createdAt` and `modifiedAt` are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    /// Condition.
    pub condition: Condition,
    /// Descriptive attributes, must be a JSON object.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    /// Coordinates.
    pub location: LocationRequest,
}

impl VehicleRequest {
    /// Validates the request and builds an unsaved vehicle.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the coordinates are out of range or the
    /// details are not a JSON object.
    pub fn into_vehicle(self) -> DomainResult<Vehicle> {
        let location = Location::new(self.location.lat, self.location.lon)?;
        let details = match self.details {
            Some(value) => Details::from_value(value)?,
            None => Details::default(),
        };
        Ok(Vehicle::new(self.condition, details, location))
    }
}

/// Location block of a vehicle response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Street line, present on enriched reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City, present on enriched reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, present on enriched reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code, present on enriched reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        let address = location.address();
        Self {
            lat: location.lat(),
            lon: location.lon(),
            address: address.map(|a| a.address.clone()),
            city: address.map(|a| a.city.clone()),
            state: address.map(|a| a.state.clone()),
            zip: address.map(|a| a.zip.clone()),
        }
    }
}

/// Vehicle response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    /// Vehicle identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VehicleId>,
    /// Condition.
    pub condition: Condition,
    /// Descriptive attributes.
    pub details: Details,
    /// Coordinates and, on enriched reads, address.
    pub location: LocationResponse,
    /// Current price, present on enriched reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            condition: vehicle.condition(),
            details: vehicle.details().clone(),
            location: LocationResponse::from(vehicle.location()),
            price: vehicle.price(),
            created_at: vehicle.created_at(),
            modified_at: vehicle.modified_at(),
        }
    }
}

// ============================================================================
// Vehicle Handlers
// ============================================================================

/// List all vehicles.
///
/// # Errors
///
/// Returns `INTERNAL_ERROR` if the store fails.
#[instrument(skip(state))]
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VehicleResponse>>, (StatusCode, Json<ErrorResponse>)> {
    info!("Listing vehicles");

    let vehicles = state.service.list().await.map_err(api_error)?;
    Ok(Json(vehicles.iter().map(VehicleResponse::from).collect()))
}

/// Get a vehicle by ID, with its current price and address.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if the ID is not numeric.
/// Returns `NOT_FOUND` if the vehicle does not exist or cannot be enriched.
#[instrument(skip(state))]
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VehicleResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Getting vehicle: {}", id);

    let vehicle_id = parse_vehicle_id(&id)?;
    let vehicle = state.service.get(vehicle_id).await.map_err(api_error)?;
    Ok(Json(VehicleResponse::from(&vehicle)))
}

/// Create a new vehicle.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if the body is malformed or invalid.
#[instrument(skip(state, body))]
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VehicleResponse>), (StatusCode, Json<ErrorResponse>)> {
    info!("Creating vehicle");

    let vehicle = parse_body(body)?;
    let created = state.service.create(vehicle).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(VehicleResponse::from(&created))))
}

/// Replace the condition, details and location of a vehicle.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if the ID or body is invalid.
/// Returns `NOT_FOUND` if the vehicle does not exist.
#[instrument(skip(state, body))]
pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Updating vehicle: {}", id);

    let vehicle_id = parse_vehicle_id(&id)?;
    let vehicle = parse_body(body)?.with_id(vehicle_id);
    let updated = state.service.update(vehicle).await.map_err(api_error)?;
    Ok(Json(VehicleResponse::from(&updated)))
}

/// Delete a vehicle.
///
/// # Errors
///
/// Returns `VALIDATION_ERROR` if the ID is not numeric.
/// Returns `NOT_FOUND` if the vehicle does not exist.
#[instrument(skip(state))]
pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    info!("Deleting vehicle: {}", id);

    let vehicle_id = parse_vehicle_id(&id)?;
    state.service.delete(vehicle_id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_vehicle_id(id: &str) -> Result<VehicleId, (StatusCode, Json<ErrorResponse>)> {
    id.parse()
        .map_err(|_| validation_error(&format!("invalid vehicle ID: {id}")))
}

fn parse_body(
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Vehicle, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(|rejection| {
        let message = rejection.body_text();
        warn!("Rejected vehicle body: {}", message);
        validation_error(&message)
    })?;
    request.into_vehicle().map_err(|e| api_error(e.into()))
}

fn api_error(err: ApplicationError) -> (StatusCode, Json<ErrorResponse>) {
    if matches!(err, ApplicationError::Repository(_)) {
        error!("Vehicle operation failed: {}", err);
    }
    err.into()
}

fn validation_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("VALIDATION_ERROR", message)),
    )
}
