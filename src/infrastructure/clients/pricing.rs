//! # Pricing Client
//!
//! [`PriceLookup`] backed by the pricing service.
//!
//! # Contract
//!
//! `GET {base}/services/price?vehicleId={id}` answers
//! `{ "vehicleId": 1, "price": "1500.00", "currency": "USD" }` for known
//! identifiers and `404` for identifiers outside its range.

use crate::domain::value_objects::{Price, VehicleId};
use crate::infrastructure::clients::error::{ClientError, ClientResult};
use crate::infrastructure::clients::http_client::HttpClient;
use crate::infrastructure::clients::traits::PriceLookup;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Path of the price lookup endpoint.
pub const PRICE_PATH: &str = "/services/price";

/// Default service name.
pub const PRICING_SERVICE: &str = "pricing";

/// Wire format of a pricing response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Identifier of the priced vehicle.
    #[serde(default)]
    pub vehicle_id: Option<u64>,
    /// Price amount.
    #[serde(default)]
    pub price: Option<Price>,
    /// Currency code, informational only.
    #[serde(default)]
    pub currency: Option<String>,
}

impl PriceResponse {
    /// Validates the response against the requested identifier.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Protocol` if the response is for another
    /// vehicle and `ClientError::NotPriced` if it carries no price.
    pub fn into_price(self, requested: VehicleId) -> ClientResult<Price> {
        if let Some(vehicle_id) = self.vehicle_id
            && vehicle_id != requested.get()
        {
            return Err(ClientError::protocol(format!(
                "price response for vehicle {vehicle_id}, requested {requested}"
            )));
        }
        self.price.ok_or_else(|| ClientError::not_priced(requested.get()))
    }
}

/// HTTP client for the pricing service.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: HttpClient,
}

impl PricingClient {
    /// Creates a pricing client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Internal` if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(PRICING_SERVICE, base_url, timeout_ms)?,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.http.timeout_ms()
    }
}

#[async_trait]
impl PriceLookup for PricingClient {
    fn service_name(&self) -> &str {
        self.http.service()
    }

    async fn lookup(&self, vehicle_id: VehicleId) -> ClientResult<Price> {
        let params = [("vehicleId", vehicle_id.get())];
        let response: PriceResponse = self
            .http
            .get_with_params(PRICE_PATH, &params)
            .await
            .map_err(|e| {
                if e.has_status(404) {
                    ClientError::not_priced(vehicle_id.get())
                } else {
                    e
                }
            })?;

        debug!(%vehicle_id, currency = ?response.currency, "price received");
        response.into_price(vehicle_id)
    }
}
