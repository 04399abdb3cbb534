//! # Application Layer
//!
//! Use cases and their error types.

pub mod error;
pub mod services;
