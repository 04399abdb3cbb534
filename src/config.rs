//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `VEHICLES_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `VEHICLES_CONFIG_FILE` | Configuration file path | `config.toml` |
//! | `VEHICLES_REST_HOST` | REST server host | `0.0.0.0` |
//! | `VEHICLES_REST_PORT` | REST server port | `8080` |
//! | `VEHICLES_REST_ENABLE_CORS` | Enable permissive CORS | `true` |
//! | `VEHICLES_LOG_LEVEL` | Log level | `info` |
//! | `VEHICLES_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `VEHICLES_PRICING_URL` | Pricing service base URL | `http://localhost:8082` |
//! | `VEHICLES_PRICING_TIMEOUT_MS` | Pricing lookup timeout | `5000` |
//! | `VEHICLES_MAPS_URL` | Maps service base URL | `http://localhost:9191` |
//! | `VEHICLES_MAPS_TIMEOUT_MS` | Maps lookup timeout | `5000` |
//! | `VEHICLES_SERVICE_NAME` | Service name for tracing | `vehicles-api` |
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("REST server: {}:{}", config.rest.host, config.rest.port);
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the configuration file path.
pub const CONFIG_FILE_ENV: &str = "VEHICLES_CONFIG_FILE";

/// Configuration file used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ============================================================================
// Server Configuration
// ============================================================================

/// REST/HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_rest_port")]
    pub port: u16,

    /// Enable CORS.
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_rest_port(),
            enable_cors: true,
        }
    }
}

impl RestConfig {
    /// Returns the socket address for the REST server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::invalid_value("rest.host:port", format!("{e}")))
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
        }
    }
}

// ============================================================================
// Remote Service Configuration
// ============================================================================

/// Connection settings for a downstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL, without a trailing path.
    pub url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_client_timeout")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Creates client settings with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: default_client_timeout(),
        }
    }

    fn validate(&self, section: &str) -> ConfigResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::invalid_value(
                format!("{section}.url"),
                format!("'{}' must start with http:// or https://", self.url),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::invalid_value(
                format!("{section}.timeout_ms"),
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST server configuration.
    #[serde(default)]
    pub rest: RestConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Pricing service.
    #[serde(default = "default_pricing")]
    pub pricing: ClientConfig,

    /// Maps service.
    #[serde(default = "default_maps")]
    pub maps: ClientConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rest: RestConfig::default(),
            log: LogConfig::default(),
            pricing: default_pricing(),
            maps: default_maps(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default file location and environment.
    ///
    /// The file path is taken from `VEHICLES_CONFIG_FILE`, falling back to
    /// `config.toml`. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> ConfigResult<Self> {
        let config_path =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path` (if it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &str) -> ConfigResult<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid configuration.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // REST configuration
        if let Some(host) = var("VEHICLES_REST_HOST") {
            self.rest.host = host;
        }
        if let Some(port) = var("VEHICLES_REST_PORT")
            && let Ok(p) = port.parse()
        {
            self.rest.port = p;
        }
        if let Some(cors) = var("VEHICLES_REST_ENABLE_CORS")
            && let Ok(enabled) = cors.parse()
        {
            self.rest.enable_cors = enabled;
        }

        // Logging configuration
        if let Some(level) = var("VEHICLES_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = var("VEHICLES_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Remote services
        if let Some(url) = var("VEHICLES_PRICING_URL") {
            self.pricing.url = url;
        }
        if let Some(timeout) = var("VEHICLES_PRICING_TIMEOUT_MS")
            && let Ok(ms) = timeout.parse()
        {
            self.pricing.timeout_ms = ms;
        }
        if let Some(url) = var("VEHICLES_MAPS_URL") {
            self.maps.url = url;
        }
        if let Some(timeout) = var("VEHICLES_MAPS_TIMEOUT_MS")
            && let Ok(ms) = timeout.parse()
        {
            self.maps.timeout_ms = ms;
        }

        if let Some(name) = var("VEHICLES_SERVICE_NAME") {
            self.service_name = name;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> ConfigResult<()> {
        self.rest.socket_addr()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "log.level",
                format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            ));
        }

        self.pricing.validate("pricing")?;
        self.maps.validate("maps")?;

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rest_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_client_timeout() -> u64 {
    5000
}

fn default_pricing() -> ClientConfig {
    ClientConfig::new("http://localhost:8082")
}

fn default_maps() -> ClientConfig {
    ClientConfig::new("http://localhost:9191")
}

fn default_service_name() -> String {
    "vehicles-api".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.rest.port, 8080);
        assert_eq!(config.pricing.url, "http://localhost:8082");
        assert_eq!(config.maps.url, "http://localhost:9191");
        assert_eq!(config.pricing.timeout_ms, 5000);
        assert_eq!(config.service_name, "vehicles-api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rest_config_socket_addr() {
        let config = RestConfig::default();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn from_toml_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            service_name = "cars"

            [rest]
            port = 9000

            [log]
            format = "pretty"

            [pricing]
            url = "http://pricing:8082"
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.service_name, "cars");
        assert_eq!(config.rest.port, 9000);
        assert_eq!(config.rest.host, "0.0.0.0");
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.pricing.url, "http://pricing:8082");
        assert_eq!(config.pricing.timeout_ms, 250);
        assert_eq!(config.maps, default_maps());
    }

    #[test]
    fn from_toml_invalid() {
        let err = AppConfig::from_toml("[rest]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_replace_values() {
        let vars: HashMap<&str, &str> = [
            ("VEHICLES_REST_PORT", "9090"),
            ("VEHICLES_REST_ENABLE_CORS", "false"),
            ("VEHICLES_LOG_FORMAT", "PRETTY"),
            ("VEHICLES_PRICING_URL", "http://pricing:1"),
            ("VEHICLES_MAPS_TIMEOUT_MS", "750"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.rest.port, 9090);
        assert!(!config.rest.enable_cors);
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.pricing.url, "http://pricing:1");
        assert_eq!(config.maps.timeout_ms, 750);
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == "VEHICLES_REST_PORT").then(|| "nope".to_string()));
        assert_eq!(config.rest.port, 8080);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let config = AppConfig::load_from("/nonexistent/vehicles.toml").unwrap();
        assert_eq!(config.maps.timeout_ms, 5000);
    }

    #[test]
    fn validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_invalid_address() {
        let mut config = AppConfig::default();
        config.rest.host = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_client_url_scheme() {
        let mut config = AppConfig::default();
        config.pricing.url = "pricing:8082".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pricing.url"));
    }

    #[test]
    fn validate_zero_timeout() {
        let mut config = AppConfig::default();
        config.maps.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("maps.timeout_ms"));
    }
}
