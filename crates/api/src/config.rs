//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATA_SERVICE_URL` - Base URL of the hosted data service
//! - `DATA_SERVICE_KEY` - Service key for the hosted data service
//!
//! ## Optional
//! - `BACKLINE_HOST` - Bind address (default: 127.0.0.1)
//! - `BACKLINE_PORT` - Listen port (default: 3000)
//! - `BACKLINE_PUBLIC_URL` - Public base URL used to build upload links
//!   (default: `http://<host>:<port>`)
//! - `BACKLINE_UPLOAD_DIR` - Directory for uploaded images (default: `public/uploads`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, used to compose absolute upload URLs
    pub public_url: Url,
    /// Directory where uploaded images are stored
    pub upload_dir: PathBuf,
    /// Hosted data service configuration
    pub data_service: DataServiceConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Hosted data service configuration.
///
/// Implements `Debug` manually to redact the service key.
#[derive(Clone)]
pub struct DataServiceConfig {
    /// Base URL of the data service (the REST root is derived from it)
    pub url: Url,
    /// Service key sent as both `apikey` and bearer token
    pub service_key: SecretString,
}

impl std::fmt::Debug for DataServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataServiceConfig")
            .field("url", &self.url.as_str())
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BACKLINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BACKLINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BACKLINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BACKLINE_PORT".to_string(), e.to_string()))?;

        let public_url = get_optional_env("BACKLINE_PUBLIC_URL")
            .unwrap_or_else(|| format!("http://{host}:{port}"));
        let public_url = Url::parse(&public_url).map_err(|e| {
            ConfigError::InvalidEnvVar("BACKLINE_PUBLIC_URL".to_string(), e.to_string())
        })?;

        let upload_dir =
            PathBuf::from(get_env_or_default("BACKLINE_UPLOAD_DIR", "public/uploads"));

        let data_service = DataServiceConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            public_url,
            upload_dir,
            data_service,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DataServiceConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = get_required_env("DATA_SERVICE_URL")?;
        let url = Url::parse(&url)
            .map_err(|e| ConfigError::InvalidEnvVar("DATA_SERVICE_URL".to_string(), e.to_string()))?;
        let service_key = get_required_env("DATA_SERVICE_KEY").map(SecretString::from)?;

        Ok(Self { url, service_key })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            public_url: Url::parse("http://localhost:3000").unwrap(),
            upload_dir: PathBuf::from("public/uploads"),
            data_service: DataServiceConfig {
                url: Url::parse("https://data.example.com").unwrap(),
                service_key: SecretString::from("service-key"),
            },
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_data_service_debug_redacts_key() {
        let config = DataServiceConfig {
            url: Url::parse("https://data.example.com").unwrap(),
            service_key: SecretString::from("super-secret-service-key"),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-service-key"));
    }
}
