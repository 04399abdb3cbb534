//! # API Layer
//!
//! External interfaces of the vehicle service.
//!
//! - **REST**: vehicle CRUD and liveness over HTTP

pub mod rest;

pub use rest as rest_api;
