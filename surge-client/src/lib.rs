//! Surge HTTP Client
//!
//! A type-safe client for driving GPU inference jobs on serverless
//! compute endpoints: submit work, poll it to completion (or wait
//! synchronously), cancel it, and probe endpoint health.
//!
//! # Example
//!
//! ```no_run
//! use surge_client::{Config, EndpointClient, PollPolicy};
//! use surge_core::domain::job::{JobState, SubmissionRequest};
//!
//! #[tokio::main]
//! async fn main() -> surge_client::Result<()> {
//!     let client = EndpointClient::new(Config::from_env()?)?;
//!
//!     let request = SubmissionRequest::new(serde_json::json!({
//!         "video": "https://example.com/sample-video.mp4",
//!         "seed": 42,
//!         "fps": 30,
//!     }));
//!
//!     let job = client.run(&request).await?;
//!     let job = client
//!         .poll_until_terminal(&job.id, &PollPolicy::default())
//!         .await?;
//!
//!     match job.state {
//!         JobState::Completed => println!("output: {:?}", job.output),
//!         JobState::Failed => eprintln!("failed: {:?}", job.error_detail),
//!         _ => eprintln!("gave up watching job {}", job.id),
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod config;
pub mod error;
mod health;
mod jobs;
mod poller;

// Re-export commonly used types
pub use api::EndpointApi;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use error::{ClientError, Result};
pub use poller::{PollPolicy, poll_until_terminal};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Client bound to one remote execution endpoint
///
/// Holds the credential, endpoint identifier, and a shared HTTP client.
/// All state is immutable after construction, so a single instance (or
/// cheap clones of it) can serve many concurrent job flows.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    config: Config,
    /// HTTP client instance
    client: Client,
}

impl EndpointClient {
    /// Create a new endpoint client
    ///
    /// Fails with [`ClientError::Config`] if the credential or endpoint
    /// identifier is missing; network reachability is not checked until
    /// first use.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            config: Config { base_url, ..config },
            client: Client::new(),
        })
    }

    /// Create a new endpoint client with a custom HTTP client
    ///
    /// This allows configuring proxies, TLS settings, connection pools,
    /// etc.
    ///
    /// # Example
    /// ```no_run
    /// use surge_client::{Config, EndpointClient};
    /// use reqwest::Client;
    ///
    /// let http_client = Client::builder().build().unwrap();
    /// let client = EndpointClient::with_client(
    ///     Config::new("sk-test", "ep-video-upscale"),
    ///     http_client,
    /// ).unwrap();
    /// ```
    pub fn with_client(config: Config, client: Client) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            config: Config { base_url, ..config },
            client,
        })
    }

    /// Get the endpoint identifier this client is bound to
    pub fn endpoint_id(&self) -> &str {
        &self.config.endpoint_id
    }

    /// Get the base URL of the endpoint API
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the URL for an operation on this endpoint
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url, self.config.endpoint_id, path
        )
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EndpointClient::new(Config::new("sk-test", "ep-video-upscale")).unwrap();
        assert_eq!(client.endpoint_id(), "ep-video-upscale");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_rejects_empty_credential() {
        let err = EndpointClient::new(Config::new("", "ep-video-upscale")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_client_rejects_empty_endpoint() {
        let err = EndpointClient::new(Config::new("sk-test", "")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = Config::new("sk-test", "ep-video-upscale")
            .with_base_url("http://localhost:8080/v2/");
        let client = EndpointClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v2");
        assert_eq!(
            client.endpoint_url("status/abc"),
            "http://localhost:8080/v2/ep-video-upscale/status/abc"
        );
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = EndpointClient::with_client(
            Config::new("sk-test", "ep-video-upscale"),
            http_client,
        )
        .unwrap();
        assert_eq!(client.endpoint_id(), "ep-video-upscale");
    }
}
