//! Configuration for the Querit client

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the Querit client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as a bearer token
    pub api_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Path of the search endpoint, appended to the base URL
    pub search_path: String,

    /// Timeout for each request
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP(S) proxy URL
    pub proxy: Option<String>,

    /// Custom `User-Agent` header value
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            search_path: crate::DEFAULT_SEARCH_PATH.to_string(),
            timeout: crate::DEFAULT_TIMEOUT,
            default_headers: HeaderMap::new(),
            proxy: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `QUERIT_API_KEY` for authentication
    /// - `QUERIT_BASE_URL` for the API base URL
    /// - `QUERIT_SEARCH_PATH` for the search endpoint path
    /// - `QUERIT_TIMEOUT` for request timeout (in seconds, fractions allowed)
    /// - `QUERIT_PROXY` for an HTTP(S) proxy
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if `QUERIT_TIMEOUT` is set but is not
    /// a positive number.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("QUERIT_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("QUERIT_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(search_path) = env::var("QUERIT_SEARCH_PATH") {
            config.search_path = search_path;
        }

        if let Ok(timeout_str) = env::var("QUERIT_TIMEOUT") {
            config.timeout = timeout_str
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or_else(|| {
                    crate::error::Error::validation(format!(
                        "QUERIT_TIMEOUT must be a positive number of seconds, got '{}'",
                        timeout_str
                    ))
                })?;
        }

        if let Ok(proxy) = env::var("QUERIT_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// Values in `other` that are still at their defaults do not override.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.search_path != crate::DEFAULT_SEARCH_PATH {
            self.search_path = other.search_path;
        }
        if other.timeout != crate::DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }

        self
    }
}
