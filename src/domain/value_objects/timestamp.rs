//! # Timestamp Value Object
//!
//! DateTime wrapper used for record creation and modification times.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::value_objects::timestamp::Timestamp;
//!
//! let created = Timestamp::from_secs(1_704_067_200).unwrap();
//! let now = Timestamp::now();
//!
//! assert!(now > created);
//! assert!(created.to_string().starts_with("2024-01-01"));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Serializes as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_out_of_range() {
        assert!(Timestamp::from_secs(i64::MAX).is_none());
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::from_secs(1000).unwrap();
        let later = Timestamp::from_secs(2000).unwrap();
        assert!(earlier < later);
        assert!(Timestamp::now() > later);
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_secs(1_704_067_200).unwrap();
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn serde_roundtrip_preserves_value() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
