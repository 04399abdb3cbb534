//! # Vehicle Details
//!
//! Opaque attribute bag describing a vehicle (body, model, manufacturer,
//! mileage and so on). The service stores and returns it untouched.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptive attributes of a vehicle.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::details::Details;
///
/// let details = Details::from_value(serde_json::json!({"model": "Impala"})).unwrap();
/// assert_eq!(details.get("model").and_then(|v| v.as_str()), Some("Impala"));
///
/// assert!(Details::from_value(serde_json::json!([1, 2])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Details(Map<String, Value>);

impl Details {
    /// Creates an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds details from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDetails` if the value is not an object.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidDetails(format!(
                "expected an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Sets an attribute, returning the updated details.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns an attribute by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
