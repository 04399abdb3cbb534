//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for the remote lookup clients.
//!
//! Provides:
//! - A base URL per remote service
//! - Configurable request timeout
//! - JSON decoding
//! - Mapping of transport failures and status codes to [`ClientError`]
//!
//! No retries are performed.
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::infrastructure::clients::http_client::HttpClient;
//!
//! let client = HttpClient::new("pricing", "http://localhost:8082", 5000)?;
//! let response: MyResponse = client.get_with_params("/services/price", &[("vehicleId", 1)]).await?;
//! ```

use crate::infrastructure::clients::error::{ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client bound to one remote service.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Service name used in errors and logs.
    service: String,
    /// Base URL without trailing slash.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client for `service` rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Internal` if the client cannot be created.
    pub fn new(
        service: impl Into<String>,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ClientError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service: service.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Timeout` or `ClientError::Unavailable` if the
    /// request fails, `ClientError::Rejected` for 4xx answers, and
    /// `ClientError::Protocol` if the response cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> ClientResult<T> {
        let url = self.url(path);
        debug!(service = %self.service, %url, "sending request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                if e.is_timeout() {
                    ClientError::timeout_with_duration(self.service.clone(), self.timeout_ms)
                } else {
                    ClientError::protocol(format!(
                        "Failed to parse {} response: {}",
                        self.service, e
                    ))
                }
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ClientError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::timeout_with_duration(self.service.clone(), self.timeout_ms)
        } else if error.is_connect() {
            ClientError::unavailable(self.service.clone(), format!("Connection failed: {}", error))
        } else {
            ClientError::unavailable(self.service.clone(), format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a ClientError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> ClientError {
        if status.is_server_error() {
            ClientError::unavailable(
                self.service.clone(),
                format!("Server error ({}): {}", status, body),
            )
        } else {
            ClientError::rejected(self.service.clone(), status.as_u16(), body)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: String,
    }

    #[test]
    fn new_client() {
        let client = HttpClient::new("pricing", "http://localhost:8082/", 5000).unwrap();
        assert_eq!(client.timeout_ms(), 5000);
        assert_eq!(client.service(), "pricing");
        assert_eq!(client.base_url(), "http://localhost:8082");
    }

    #[test]
    fn url_joins_paths() {
        let client = HttpClient::new("maps", "http://maps:9191/", 1000).unwrap();
        assert_eq!(client.url("/maps"), "http://maps:9191/maps");
        assert_eq!(client.url("maps"), "http://maps:9191/maps");
    }

    #[tokio::test]
    async fn decodes_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/echo"))
            .and(query_param("q", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "ok"})))
            .mount(&server)
            .await;

        let client = HttpClient::new("echo", server.uri(), 1000).unwrap();
        let echo: Echo = client.get_with_params("/echo", &[("q", 1)]).await.unwrap();
        assert_eq!(echo.value, "ok");
    }

    #[tokio::test]
    async fn server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpClient::new("echo", server.uri(), 1000).unwrap();
        let err = client
            .get_with_params::<Echo, _>("/echo", &[("q", 1)])
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn client_error_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let client = HttpClient::new("echo", server.uri(), 1000).unwrap();
        let err = client
            .get_with_params::<Echo, _>("/echo", &[("q", 1)])
            .await
            .unwrap_err();
        assert!(err.has_status(404));
    }

    #[tokio::test]
    async fn malformed_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpClient::new("echo", server.uri(), 1000).unwrap();
        let err = client
            .get_with_params::<Echo, _>("/echo", &[("q", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Protocol { .. }));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"value": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new("echo", server.uri(), 50).unwrap();
        let err = client
            .get_with_params::<Echo, _>("/echo", &[("q", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Timeout { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_unavailable() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = HttpClient::new("echo", "http://127.0.0.1:9", 500).unwrap();
        let err = client
            .get_with_params::<Echo, _>("/echo", &[("q", 1)])
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
