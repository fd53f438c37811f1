/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, configuration)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Which of the configured timeouts expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPhase {
    /// Establishing the connection (`connect_timeout`)
    Connect,
    /// The whole request (`timeout`)
    Request,
}

impl fmt::Display for TimeoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutPhase::Connect => f.write_str("Connection"),
            TimeoutPhase::Request => f.write_str("Request"),
        }
    }
}

/// Main error type for the intern tracker adapter
#[derive(Error, Debug)]
pub enum TrackerError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status; `body` is the raw response text
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response was well-formed JSON but unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection or request did not complete in time
    #[error("{phase} timed out after {duration}s")]
    Timeout { phase: TimeoutPhase, duration: u64 },
}

impl TrackerError {
    /// Check if re-issuing the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            TrackerError::Http(_)
            | TrackerError::Timeout { .. }
            | TrackerError::InvalidResponse(_) => true,
            TrackerError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            TrackerError::Api { status, .. } => Some(*status),
            TrackerError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the request itself (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Short message for display.
    ///
    /// Error bodies from the backend carry the reason in `detail` (framework
    /// errors) or `message` (custom handler); the raw body is used otherwise.
    pub fn detail(&self) -> String {
        match self {
            TrackerError::Api { status, body } => {
                let reason = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| {
                        ["detail", "message"].iter().find_map(|key| {
                            value.get(key).and_then(|v| v.as_str()).map(str::to_string)
                        })
                    })
                    .unwrap_or_else(|| body.trim().to_string());
                if reason.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status}: {reason}")
                }
            }
            other => other.to_string(),
        }
    }

    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        TrackerError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout_err = TrackerError::Timeout {
            phase: TimeoutPhase::Request,
            duration: 30,
        };
        assert!(timeout_err.is_retryable());
        assert_eq!(timeout_err.to_string(), "Request timed out after 30s");

        let server_err = TrackerError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(server_err.is_retryable());

        let not_found = TrackerError::api_error(StatusCode::NOT_FOUND, "gone");
        assert!(!not_found.is_retryable());
        assert!(not_found.is_client_error());

        assert!(!TrackerError::Config("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_api_error_creation() {
        let err = TrackerError::api_error(StatusCode::BAD_REQUEST, "Invalid status");
        match &err {
            TrackerError::Api { status, body } => {
                assert_eq!(*status, 400);
                assert_eq!(body, "Invalid status");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "API error (HTTP 400): Invalid status");
    }

    #[test]
    fn test_detail_prefers_json_reason() {
        let err = TrackerError::api_error(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Temporary work update not found (may have been auto-deleted after 24h)"}"#,
        );
        assert_eq!(
            err.detail(),
            "HTTP 404: Temporary work update not found (may have been auto-deleted after 24h)"
        );

        let err = TrackerError::api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "HTTP_ERROR", "message": "Failed to create work update", "status_code": 500}"#,
        );
        assert_eq!(err.detail(), "HTTP 500: Failed to create work update");
    }

    #[test]
    fn test_detail_falls_back_to_raw_body() {
        let err = TrackerError::api_error(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err.detail(), "HTTP 502: upstream down");

        let err = TrackerError::api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.detail(), "HTTP 503");
    }
}
