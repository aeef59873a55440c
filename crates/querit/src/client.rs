//! Main client implementation for the Querit API

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::{HttpProvider, QueritHttpProvider},
    resources::Search,
    types::{SearchRequest, SearchResponse},
};

/// Main client for interacting with the Querit Search API.
///
/// The client is cheap to clone and holds only immutable configuration, so
/// one instance can be shared and reused for any number of searches.
///
/// # Example
///
/// ```rust,no_run
/// use querit::{Client, SearchRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::try_new("querit-sk-...")?;
/// let response = client.search(SearchRequest::new("chat", 5)?).await?;
/// for item in &response {
///     println!("{}", item.url);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// HTTP provider for making requests (handles auth, timeout, proxy)
    provider: Arc<dyn HttpProvider>,

    /// Path of the search endpoint
    search_path: String,
}

impl Client {
    /// Create a new client with an API key.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the default
    /// configuration (for example, a blank API key). For fallible construction use
    /// [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use querit::Client;
    ///
    /// let client = Client::new("querit-sk-...");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("Failed to build client with provided API key")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if the key is empty, or an error if the
    /// HTTP client cannot be configured.
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> QueritClientBuilder {
        QueritClientBuilder::default()
    }

    /// Create a client with a custom HTTP provider, using the default search path.
    pub fn from_provider(provider: Arc<dyn HttpProvider>) -> Self {
        Self::from_provider_with_path(provider, crate::DEFAULT_SEARCH_PATH)
    }

    /// Create a client with a custom HTTP provider and search path.
    pub fn from_provider_with_path(
        provider: Arc<dyn HttpProvider>,
        search_path: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                provider,
                search_path: search_path.into(),
            }),
        }
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the base URL or proxy is
    /// invalid, or the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let ClientConfig {
            api_key,
            base_url,
            search_path,
            timeout,
            default_headers,
            proxy,
            user_agent,
        } = config;

        if search_path.trim().is_empty() {
            return Err(Error::InvalidUrl("Search path cannot be empty".to_string()));
        }

        let mut provider_builder = QueritHttpProvider::builder()
            .timeout(timeout)
            .headers(default_headers);

        if let Some(api_key) = api_key {
            provider_builder = provider_builder.api_key_secret(api_key);
        }
        if let Some(base_url) = base_url {
            provider_builder = provider_builder.base_url(base_url);
        }
        if let Some(proxy) = proxy {
            provider_builder = provider_builder.proxy(proxy);
        }
        if let Some(user_agent) = user_agent {
            provider_builder = provider_builder.user_agent(user_agent);
        }

        let provider = Arc::new(provider_builder.build()?);
        Ok(Self::from_provider_with_path(provider, search_path))
    }

    /// Create a client from `QUERIT_*` environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Access the Search API endpoint.
    pub fn search_api(&self) -> Search {
        Search::new(self.clone())
    }

    /// Run a search.
    ///
    /// Shorthand for `client.search_api().create(request)`.
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] for HTTP 401/403
    /// - [`Error::Validation`] for HTTP 400 or a request that fails local checks
    /// - [`Error::Timeout`] / [`Error::Connection`] for transport failures
    /// - [`Error::ResponseValidation`] for a 2xx body that cannot be parsed
    /// - [`Error::RateLimit`] / [`Error::Api`] for any other non-2xx status
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.search_api().create(request).await
    }

    /// HTTP provider requests are sent through.
    pub(crate) fn provider(&self) -> &Arc<dyn HttpProvider> {
        &self.inner.provider
    }

    /// Path of the search endpoint.
    pub fn search_path(&self) -> &str {
        &self.inner.search_path
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.inner.provider.base_url()
    }

    /// Name of the underlying provider (for debugging).
    pub fn provider_name(&self) -> &'static str {
        self.inner.provider.provider_name()
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct QueritClientBuilder {
    config: ClientConfig,
}

impl QueritClientBuilder {
    /// Start from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the search endpoint path.
    pub fn search_path(mut self, search_path: impl Into<String>) -> Self {
        self.config.search_path = search_path.into();
        self
    }

    /// Set the timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in (possibly fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `secs` is not a positive finite number.
    pub fn timeout_secs(self, secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(Error::validation(format!(
                "timeout must be a positive number of seconds, got {}",
                secs
            )));
        }
        let timeout = Duration::try_from_secs_f64(secs).map_err(|e| {
            Error::validation(format!("timeout of {} seconds is out of range: {}", secs, e))
        })?;
        Ok(self.timeout(timeout))
    }

    /// Route requests through an HTTP(S) proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
