//! Client configuration
//!
//! Binds the API credential, endpoint identifier, and connection
//! settings used to construct an [`EndpointClient`](crate::EndpointClient).
//! The credential is an explicit value, never read from ambient state
//! inside the client itself; `from_env` is the one convenience bridge
//! for environment-style deployment.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.surge.run/v2";

/// Default per-request timeout for non-blocking operations
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential, sent as a bearer token
    pub api_key: String,

    /// Identifier of the remote execution target
    pub endpoint_id: String,

    /// Base URL of the endpoint API
    pub base_url: String,

    /// Per-request timeout for submit/status/cancel/health calls.
    /// Synchronous runs get their own ceiling derived from the caller's
    /// wait budget.
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a configuration with default connection settings
    pub fn new(api_key: impl Into<String>, endpoint_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint_id: endpoint_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SURGE_API_KEY (required)
    /// - SURGE_ENDPOINT_ID (required)
    /// - SURGE_API_BASE_URL (optional, default: https://api.surge.run/v2)
    /// - SURGE_REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SURGE_API_KEY")
            .map_err(|_| ClientError::Config("SURGE_API_KEY environment variable not set".into()))?;

        let endpoint_id = std::env::var("SURGE_ENDPOINT_ID").map_err(|_| {
            ClientError::Config("SURGE_ENDPOINT_ID environment variable not set".into())
        })?;

        let base_url =
            std::env::var("SURGE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = std::env::var("SURGE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            api_key,
            endpoint_id,
            base_url,
            request_timeout,
        })
    }

    /// Overrides the base URL (e.g. for a self-hosted deployment)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config("api_key cannot be empty".into()));
        }

        if self.endpoint_id.trim().is_empty() {
            return Err(ClientError::Config("endpoint_id cannot be empty".into()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Config(
                "base_url must start with http:// or https://".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new("sk-test", "ep-video-upscale");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("sk-test", "ep-video-upscale");
        assert!(config.validate().is_ok());

        // Empty credential should fail
        config.api_key = String::new();
        assert!(config.validate().is_err());
        config.api_key = "sk-test".to_string();

        // Whitespace-only endpoint should fail
        config.endpoint_id = "   ".to_string();
        assert!(config.validate().is_err());
        config.endpoint_id = "ep-video-upscale".to_string();

        // Invalid URL should fail
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080/v2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("sk-test", "ep-video-upscale")
            .with_base_url("https://gpu.internal/v2")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "https://gpu.internal/v2");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
