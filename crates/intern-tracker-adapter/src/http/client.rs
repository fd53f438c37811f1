/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::TimeoutPhase;
use crate::http::{Result, TrackerError};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of a locally running backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Timeout error naming the limit that actually expired
    pub fn timeout_error(&self, phase: TimeoutPhase) -> TrackerError {
        let limit = match phase {
            TimeoutPhase::Connect => self.connect_timeout,
            TimeoutPhase::Request => self.timeout,
        };
        TrackerError::Timeout {
            phase,
            duration: limit.as_secs(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the intern tracker backend
#[derive(Debug, Clone)]
pub struct InternTrackerClient {
    http_client: Client,
    base_url: Url,
    config: ClientConfig,
}

impl InternTrackerClient {
    /// Create a new client against the default local backend
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and backend URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(TrackerError::Config(format!(
                "base URL must be an http(s) URL, got {base_url}"
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL from path segments; segments are percent-encoded
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TrackerError::Config(format!("cannot extend base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint_url(segments)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON body; non-2xx becomes `TrackerError::Api`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|err| self.transport_error(err))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "request failed");
            return Err(TrackerError::api_error(status, body));
        }

        debug!(%method, %url, status = status.as_u16(), "request succeeded");
        Ok(serde_json::from_str(&body)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> TrackerError {
        if err.is_timeout() {
            // reqwest flags connect timeouts as both timeout and connect errors
            let phase = if err.is_connect() {
                TimeoutPhase::Connect
            } else {
                TimeoutPhase::Request
            };
            self.config.timeout_error(phase)
        } else {
            TrackerError::Http(err)
        }
    }
}
