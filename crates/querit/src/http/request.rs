//! HTTP request builder

use super::Response;
use crate::error::{Error, Result};
use crate::observability::HttpExchange;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::time::{Duration, Instant};
use url::Url;

/// Builder for a single HTTP request.
///
/// `send` makes exactly one attempt; failed requests are never retried.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: crate::DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(format!("value for header '{}'", key)))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Set a header that is already parsed.
    pub fn typed_header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and get a response.
    ///
    /// Any status code, including errors, is returned as a [`Response`]; only
    /// transport failures produce an `Err` here.
    pub async fn send(self) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("No HTTP client configured".to_string()))?;

        let mut exchange = HttpExchange::new(self.method.as_str(), self.url.path());
        let mut req = client
            .request(self.method.clone(), self.url.as_str())
            .timeout(self.timeout)
            .headers(self.headers);

        if let Some(body) = self.body {
            exchange = exchange.with_body_size(body.len());
            req = req.body(body);
        }

        exchange.log_sent();
        let started = Instant::now();
        let timeout = self.timeout;

        let map_transport = |e: reqwest::Error| {
            if e.is_timeout() {
                Error::Timeout(timeout)
            } else {
                Error::Connection(e.to_string())
            }
        };

        let result = async {
            let resp = req.send().await.map_err(map_transport)?;
            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp.bytes().await.map_err(map_transport)?.to_vec();
            Ok::<_, Error>(Response::new(status, headers, body, started.elapsed()))
        }
        .await;

        match &result {
            Ok(response) => exchange.log_received(
                response.status().as_u16(),
                response.elapsed(),
                response.body().len(),
            ),
            Err(e) => exchange.log_transport_failure(started.elapsed(), e),
        }

        result
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}
