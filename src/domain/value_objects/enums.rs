//! # Domain Enums
//!
//! Enumeration types for vehicle records.
//!
//! - [`Condition`] - New or used vehicle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition of a vehicle.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::enums::Condition;
///
/// let condition: Condition = serde_json::from_str("\"USED\"").unwrap();
/// assert_eq!(condition, Condition::Used);
/// assert_eq!(condition.to_string(), "USED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    /// Never registered.
    New,
    /// Previously owned.
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Used => write!(f, "USED"),
        }
    }
}
