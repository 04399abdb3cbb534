//! # Infrastructure Layer
//!
//! Adapters for storage and for the remote services a vehicle read
//! depends on.

pub mod clients;
pub mod persistence;
