//! # Domain Layer
//!
//! Core vehicle model: entities, value objects, and validation errors.
//! No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;
