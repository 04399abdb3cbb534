//! # REST API
//!
//! REST endpoints using axum for vehicle records.
//!
//! # Endpoints
//!
//! ## Vehicles
//! - `GET /vehicles` - List vehicles
//! - `GET /vehicles/{id}` - Get vehicle with price and address
//! - `POST /vehicles` - Create vehicle
//! - `PUT /vehicles/{id}` - Update vehicle
//! - `DELETE /vehicles/{id}` - Delete vehicle
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use vehicles_api::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { service: Arc::new(service) });
//! let router = create_router(state, true);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, ErrorResponse, HealthResponse, LocationRequest, LocationResponse, VehicleRequest,
    VehicleResponse,
};
pub use routes::create_router;
