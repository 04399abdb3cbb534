//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! /
//! ├── /health              GET    - Health check
//! └── /vehicles            GET    - List vehicles
//!     ├── /                POST   - Create vehicle
//!     └── /{id}            GET    - Get enriched vehicle
//!                          PUT    - Update vehicle
//!                          DELETE - Delete vehicle
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::api::rest::{create_router, AppState};
//!
//! let state = Arc::new(AppState { service });
//! let router = create_router(state, true);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use crate::api::rest::handlers::{
    AppState, create_vehicle, delete_vehicle, get_vehicle, health_check, list_vehicles,
    update_vehicle,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Creates the REST API router with all endpoints.
///
/// Requests are traced with `TraceLayer`; a permissive CORS layer is added
/// when `enable_cors` is set.
pub fn create_router(state: Arc<AppState>, enable_cors: bool) -> Router {
    let router = routes().layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

/// Creates a minimal router for testing without middleware.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    routes().with_state(state)
}
