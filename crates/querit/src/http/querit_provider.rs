//! Querit API HTTP provider implementation
//!
//! This provider sends requests to the hosted Querit API with bearer-token
//! authentication, a per-request timeout and optional proxy support.

use super::{HttpProvider, Method, RequestBuilder, provider::serialize_body};
use crate::error::{Error, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::{sync::Arc, time::Duration};
use url::Url;

/// HTTP provider for the hosted Querit API.
///
/// # Example
///
/// ```rust,no_run
/// use querit::http::QueritHttpProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(QueritHttpProvider::builder()
///     .api_key("querit-sk-...")
///     .build()
///     .unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct QueritHttpProvider {
    pub(crate) inner: Arc<ProviderInner>,
}

#[derive(Debug)]
pub(crate) struct ProviderInner {
    /// HTTP client for making requests
    pub(crate) http_client: reqwest::Client,
    /// Base URL for the API, without a trailing slash
    pub(crate) base_url: String,
    /// API key sent as a bearer token
    pub(crate) api_key: SecretString,
    /// Timeout applied to every request
    pub(crate) timeout: Duration,
    /// Custom headers to include with every request
    pub(crate) default_headers: http::HeaderMap,
}

impl QueritHttpProvider {
    /// Create a new builder for configuring the provider.
    pub fn builder() -> QueritHttpProviderBuilder {
        QueritHttpProviderBuilder::default()
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Create a request builder with provider configuration.
    pub(crate) fn build_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let joined = format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'));
        let url = Url::parse(&joined).map_err(|e| {
            Error::InvalidUrl(format!("Failed to construct URL from path '{}': {}", path, e))
        })?;

        let mut auth = http::HeaderValue::from_str(&format!(
            "Bearer {}",
            self.inner.api_key.expose_secret()
        ))
        .map_err(|_| Error::InvalidHeaderValue("API key contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .typed_header(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"))
            .typed_header(http::header::AUTHORIZATION, auth);

        for (key, value) in &self.inner.default_headers {
            builder = builder.typed_header(key.clone(), value.clone());
        }

        Ok(builder)
    }
}

#[async_trait]
impl HttpProvider for QueritHttpProvider {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&(dyn erased_serde::Serialize + Send + Sync)>,
    ) -> Result<super::Response> {
        let mut builder = self.build_request(method, path)?;

        if let Some(body) = body {
            builder = builder.body(serialize_body(body)?);
        }

        builder.send().await
    }

    fn provider_name(&self) -> &'static str {
        "querit"
    }

    fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

/// Builder for creating a `QueritHttpProvider` with custom configuration.
///
/// # Example
///
/// ```rust,no_run
/// use querit::http::QueritHttpProvider;
///
/// let provider = QueritHttpProvider::builder()
///     .api_key("querit-sk-...")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct QueritHttpProviderBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    user_agent: Option<String>,
    default_headers: http::HeaderMap,
}

impl QueritHttpProviderBuilder {
    /// Set the API key used as the bearer token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set an API key that is already wrapped as a secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `https://api.querit.ai`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route all requests through this proxy URL.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<http::HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<http::HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.default_headers.insert(key, value);
        Ok(self)
    }

    /// Add already-parsed headers to include with every request.
    pub fn headers(mut self, headers: http::HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    /// Build the provider with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is provided, or it is blank
    /// - The base URL is empty, unparseable, or not http/https
    /// - The proxy URL is invalid or HTTP client creation fails
    pub fn build(self) -> Result<QueritHttpProvider> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| Error::MissingConfig("An API key must be provided".to_string()))?;

        let timeout = self.timeout.unwrap_or(crate::DEFAULT_TIMEOUT);
        let base_url = parse_base_url(
            self.base_url
                .as_deref()
                .unwrap_or(crate::DEFAULT_BASE_URL),
        )?;

        let mut http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| format!("querit-rust/{}", crate::VERSION)),
            );

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            http_client = http_client.proxy(proxy);
        }

        let http_client = http_client
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(QueritHttpProvider {
            inner: Arc::new(ProviderInner {
                http_client,
                base_url,
                api_key,
                timeout,
                default_headers: self.default_headers,
            }),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let url: Url = raw
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::InvalidUrl(format!(
                "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                scheme
            )));
        }
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
