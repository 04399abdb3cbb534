//! # Maps Client
//!
//! [`LocationResolver`] backed by the maps service.
//!
//! # Contract
//!
//! `GET {base}/maps?lat={lat}&lon={lon}` answers
//! `{ "address": "...", "city": "...", "state": "...", "zip": "..." }`.

use crate::domain::value_objects::Address;
use crate::infrastructure::clients::error::{ClientError, ClientResult};
use crate::infrastructure::clients::http_client::HttpClient;
use crate::infrastructure::clients::traits::LocationResolver;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Path of the reverse lookup endpoint.
pub const MAPS_PATH: &str = "/maps";

/// Default service name.
pub const MAPS_SERVICE: &str = "maps";

/// Wire format of a maps response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapsResponse {
    /// Street line.
    #[serde(default)]
    pub address: String,
    /// City name.
    #[serde(default)]
    pub city: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub zip: String,
}

impl From<MapsResponse> for Address {
    fn from(response: MapsResponse) -> Self {
        Address::new(response.address, response.city, response.state, response.zip)
    }
}

/// HTTP client for the maps service.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: HttpClient,
}

impl MapsClient {
    /// Creates a maps client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Internal` if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(MAPS_SERVICE, base_url, timeout_ms)?,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }
}

#[async_trait]
impl LocationResolver for MapsClient {
    fn service_name(&self) -> &str {
        self.http.service()
    }

    async fn resolve(&self, lat: f64, lon: f64) -> ClientResult<Address> {
        let params = [("lat", lat), ("lon", lon)];
        let response: MapsResponse = self
            .http
            .get_with_params(MAPS_PATH, &params)
            .await
            .map_err(|e| {
                if e.has_status(404) {
                    ClientError::unresolved(format!("no address for ({lat}, {lon})"))
                } else {
                    e
                }
            })?;

        let address = Address::from(response);
        if address.is_blank() {
            return Err(ClientError::unresolved(format!(
                "empty address for ({lat}, {lon})"
            )));
        }
        debug!(lat, lon, %address, "address resolved");
        Ok(address)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn response_converts_to_address() {
        let response: MapsResponse = serde_json::from_value(serde_json::json!({
            "address": "123 Main",
            "city": "Springfield",
            "state": "NY",
            "zip": "10001"
        }))
        .unwrap();
        let address = Address::from(response);
        assert_eq!(address, Address::new("123 Main", "Springfield", "NY", "10001"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let response: MapsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(Address::from(response).is_blank());
    }
}
