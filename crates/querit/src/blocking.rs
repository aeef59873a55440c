//! Blocking wrapper around the async [`Client`](crate::Client)
//!
//! For callers without an async runtime. Each `blocking::Client` owns a
//! current-thread tokio runtime and drives one search to completion per call.
//! Do not use it from inside an async context; tokio will panic when a
//! runtime is blocked on from within another.

use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::RawResponse,
    types::{SearchRequest, SearchResponse},
};

/// Synchronous Querit client.
///
/// # Example
///
/// ```rust,no_run
/// use querit::{SearchRequest, blocking::Client};
///
/// let client = Client::try_new("querit-sk-...")?;
/// let response = client.search(SearchRequest::new("chat", 5)?)?;
/// println!("{} results", response.len());
/// # Ok::<(), querit::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl Client {
    /// Create a blocking client with an API key.
    ///
    /// # Errors
    ///
    /// Same as [`crate::Client::try_new`], plus [`Error::HttpClient`] if the
    /// runtime cannot be started.
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::wrap(crate::Client::try_new(api_key)?)
    }

    /// Create a blocking client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::wrap(crate::Client::from_config(config)?)
    }

    /// Wrap an existing async client.
    pub fn wrap(inner: crate::Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::HttpClient(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// Run a search, blocking the current thread until it completes.
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.runtime.block_on(self.inner.search(request))
    }

    /// Run a search and keep the HTTP metadata.
    pub fn search_raw(&self, request: SearchRequest) -> Result<RawResponse<SearchResponse>> {
        self.runtime
            .block_on(self.inner.search_api().with_raw_response().create(request))
    }

    /// The async client this wraps.
    pub fn as_async(&self) -> &crate::Client {
        &self.inner
    }
}
