//! Search API endpoint

use crate::{
    client::Client,
    error::Result,
    http::{Method, RawResponse, Response},
    observability::SearchSummary,
    types::{SearchRequest, SearchResponse},
    validation::validate_search_request,
};

/// Search API resource.
#[derive(Clone)]
pub struct Search {
    client: Client,
}

impl Search {
    /// Create a new Search resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run a search.
    ///
    /// Makes exactly one HTTP attempt. Failures are classified into
    /// [`crate::Error`] and returned; nothing is retried.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use querit::{Client, SearchRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::try_new("querit-sk-...")?;
    /// let response = client
    ///     .search_api()
    ///     .create(SearchRequest::new("chat", 5)?)
    ///     .await?;
    ///
    /// for item in &response {
    ///     println!("{} - {}", item.title, item.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: SearchRequest) -> Result<SearchResponse> {
        let summary = SearchSummary::new(&request);
        let result = send_search(&self.client, &request, &summary)
            .await
            .and_then(Response::parse_result::<SearchResponse>);
        summary.log_outcome(result.as_ref());
        result
    }

    /// Enable raw response mode for the next request.
    ///
    /// Returns a wrapper that provides access to response headers,
    /// status codes, and other HTTP metadata along with the parsed body.
    pub fn with_raw_response(&self) -> SearchRaw {
        SearchRaw {
            client: self.client.clone(),
        }
    }
}

/// Search resource in raw response mode.
#[derive(Clone)]
pub struct SearchRaw {
    client: Client,
}

impl SearchRaw {
    /// Run a search and return the parsed body together with HTTP metadata.
    pub async fn create(&self, request: SearchRequest) -> Result<RawResponse<SearchResponse>> {
        let summary = SearchSummary::new(&request);
        let result = send_search(&self.client, &request, &summary)
            .await
            .and_then(Response::into_parsed_raw::<SearchResponse>);
        summary.log_outcome(result.as_ref().map(RawResponse::parsed));
        result
    }
}

async fn send_search(
    client: &Client,
    request: &SearchRequest,
    summary: &SearchSummary,
) -> Result<Response> {
    validate_search_request(request)?;
    summary.log_dispatch();

    let body: &(dyn erased_serde::Serialize + Send + Sync) = request;
    client
        .provider()
        .request(Method::POST, client.search_path(), Some(body))
        .await
}
