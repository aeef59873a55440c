//! HTTP provider trait for abstracting the transport
//!
//! Resources talk to an [`HttpProvider`] rather than to `reqwest` directly, so
//! the transport can be swapped (for a proxying gateway, a recording fake in
//! tests, etc.) without touching request or response handling.

use crate::{
    error::Result,
    http::{Method, Response},
};
use async_trait::async_trait;
use std::fmt;

/// Provider trait for making HTTP requests.
///
/// Implementations handle authentication and transport. They return every
/// HTTP response as a [`Response`], leaving status classification to the
/// caller, and report only transport failures as errors.
#[async_trait]
pub trait HttpProvider: Send + Sync + fmt::Debug {
    /// Make a request and return the raw response.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `path` - API endpoint path (e.g., "/v1/search")
    /// * `body` - Optional request body (will be serialized to JSON)
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be built or the transport
    /// failed (connection refused, timeout).
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<Response>;

    /// Get the provider name for debugging/logging.
    fn provider_name(&self) -> &'static str;

    /// Get the base URL for this provider (for debugging).
    fn base_url(&self) -> &str;
}

/// Helper function to serialize a body to JSON bytes.
pub(crate) fn serialize_body(
    body: &(dyn erased_serde::Serialize + Send + Sync),
) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(crate::error::Error::Serialization)
}
