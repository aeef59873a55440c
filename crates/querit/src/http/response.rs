//! HTTP response handling

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, Result};

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>, elapsed: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Time between sending the request and receiving the full body.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as JSON.
    ///
    /// A body that does not match `T` is reported as [`Error::ResponseValidation`].
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::ResponseValidation(e.to_string()))
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx response into the matching SDK error.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(
                self.status.as_u16(),
                &self.text(),
                &self.headers,
            ))
        }
    }

    /// Parse a successful response, converting HTTP errors to SDK errors.
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T> {
        self.error_for_status()?.json()
    }

    /// Parse a successful response into a [`RawResponse`], keeping HTTP metadata.
    pub fn into_parsed_raw<T: DeserializeOwned>(self) -> Result<RawResponse<T>> {
        let response = self.error_for_status()?;
        let parsed = response.json()?;

        Ok(RawResponse {
            parsed,
            status: response.status,
            headers: response.headers,
            elapsed: response.elapsed,
        })
    }
}

/// A parsed response body together with its HTTP metadata.
///
/// # Example
///
/// ```rust,no_run
/// # use querit::{Client, SearchRequest};
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let raw = client
///     .search_api()
///     .with_raw_response()
///     .create(SearchRequest::new("chat", 5)?)
///     .await?;
///
/// println!("Status: {}", raw.status_code());
/// println!("Request ID: {:?}", raw.request_id());
/// println!("Elapsed: {:?}", raw.elapsed());
/// println!("Results: {}", raw.parsed().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    parsed: T,
    status: StatusCode,
    headers: HeaderMap,
    elapsed: Duration,
}

impl<T> RawResponse<T> {
    /// Get a reference to the parsed response body.
    pub fn parsed(&self) -> &T {
        &self.parsed
    }

    /// Consume this raw response and return the parsed body.
    pub fn into_parsed(self) -> T {
        self.parsed
    }

    /// Get the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get the HTTP status as a `StatusCode` object.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get a reference to the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Time elapsed for the complete request/response cycle.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the request ID from headers.
    pub fn request_id(&self) -> Option<String> {
        self.headers
            .get("x-request-id")?
            .to_str()
            .ok()
            .map(|s| s.to_string())
    }
}
