//! Error types for the Querit SDK
//!
//! Every failure surfaces as a single [`Error`] enum built with `thiserror`.
//! Variants are grouped into three kinds (see [`ErrorKind`]) so callers can
//! branch on authentication, validation, or everything else without matching
//! each variant.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a Querit SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or expired credentials (HTTP 401/403).
    Auth,
    /// Malformed request, caught client-side or rejected by the server (HTTP 400).
    Validation,
    /// Any other failure: unexpected status, transport failure, timeout, bad body.
    Api,
}

/// Main error type for the Querit SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication failed (401) or access was forbidden (403).
    #[error("Authentication failed (status {status}): {message}")]
    Authentication {
        /// HTTP status code (401 or 403)
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// The request was rejected as invalid.
    ///
    /// `status` is `Some(400)` when the server rejected it and `None` when the
    /// SDK caught it before sending.
    #[error("Invalid request: {message}")]
    Validation {
        /// HTTP status code, if the server produced this error
        status: Option<u16>,
        /// Description of what was invalid
        message: String,
    },

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Error message from the API
        message: String,
        /// Time to wait before retrying, if provided by the API
        retry_after: Option<Duration>,
    },

    /// Non-2xx status not covered by a more specific variant.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
        /// Request ID for debugging
        request_id: Option<String>,
    },

    /// Failed to deserialize a successful API response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),
}

impl Error {
    /// Create a client-side validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            status: None,
            message: message.into(),
        }
    }

    /// Create an API error from an HTTP response status and body.
    pub fn from_response(status: u16, body: &str, headers: &http::HeaderMap) -> Self {
        let message = extract_message(body);

        match status {
            400 => Error::Validation {
                status: Some(status),
                message,
            },
            401 | 403 => Error::Authentication { status, message },
            429 => Error::RateLimit {
                message,
                retry_after: headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs),
            },
            _ => Error::Api {
                status,
                message,
                request_id: headers
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            },
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Authentication { .. } => ErrorKind::Auth,
            Error::Validation { .. }
            | Error::InvalidUrl(_)
            | Error::MissingConfig(_)
            | Error::HttpClient(_)
            | Error::InvalidHeaderName(_)
            | Error::InvalidHeaderValue(_) => ErrorKind::Validation,
            Error::RateLimit { .. }
            | Error::Api { .. }
            | Error::ResponseValidation(_)
            | Error::Connection(_)
            | Error::Timeout(_)
            | Error::Serialization(_) => ErrorKind::Api,
        }
    }

    /// HTTP status code, for errors derived from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::Validation { status, .. } => *status,
            Error::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Whether the failure happened below HTTP (no response was received).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::Timeout(_))
    }

    /// Check if retrying the same request could succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimit { .. } => true,
            Error::Connection(_) => true,
            Error::Timeout(_) => true,
            Error::Api { status, .. } => *status >= 500 || *status == 408,
            _ => false,
        }
    }

    /// Get retry delay if this is a rate limit error with retry-after.
    pub fn retry_after(&self) -> Option<Duration> {
        if let Error::RateLimit { retry_after, .. } = self {
            *retry_after
        } else {
            None
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::validation(format!("missing required field `{}`", err.field_name()))
    }
}

// Helper structure for pulling a message out of an error body. The service
// reports `error_code`/`error_msg`; gateways in front of it tend to use
// `message` or a nested `error.message`.

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error_msg: Option<String>,
    message: Option<String>,
    error: Option<serde_json::Value>,
}

fn extract_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        let nested = parsed.error.as_ref().and_then(|e| match e {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            _ => None,
        });

        if let Some(message) = parsed
            .error_msg
            .or(parsed.message)
            .or(nested)
            .filter(|m| !m.is_empty())
        {
            return message;
        }
    }

    body.trim().to_string()
}
