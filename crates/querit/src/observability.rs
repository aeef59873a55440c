//! Structured logging for searches
//!
//! Two layers are logged. [`SearchSummary`] describes a search as the caller
//! sees it (query size, requested count, filters, results). [`HttpExchange`]
//! describes the single HTTP round trip underneath. The API key and the query
//! text are never logged.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::types::{SearchRequest, SearchResponse};

/// What a search asked for, recorded before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    /// Length of the query in bytes
    pub query_len: usize,
    /// Requested number of results
    pub count: u32,
    /// Number of filter entries (languages, countries, sites, time range, extras)
    pub filter_count: usize,
}

impl SearchSummary {
    /// Summarize a request.
    pub fn new(request: &SearchRequest) -> Self {
        let filter_count = request.filters().map_or(0, |f| {
            f.languages.len()
                + f.countries.len()
                + f.sites.include.len()
                + f.sites.exclude.len()
                + usize::from(f.time_range.is_some())
                + f.extra.len()
        });

        Self {
            query_len: request.query().len(),
            count: request.count(),
            filter_count,
        }
    }

    /// Log that the search is about to be sent.
    pub fn log_dispatch(&self) {
        debug!(
            query_len = self.query_len,
            count = self.count,
            filter_count = self.filter_count,
            "Dispatching search"
        );
    }

    /// Log how the search ended.
    pub fn log_outcome(&self, outcome: Result<&SearchResponse, &Error>) {
        match outcome {
            Ok(response) => {
                info!(
                    count = self.count,
                    result_count = response.len(),
                    search_id = response.search_id,
                    "Search completed"
                );
                // A 2xx can still carry a service-level error code.
                if let Some(code) = response.error_code.filter(|c| *c != 0) {
                    warn!(
                        error_code = code,
                        error_msg = response.error_msg.as_deref().unwrap_or(""),
                        "Search succeeded with a service error code"
                    );
                }
            }
            Err(err) => warn!(
                count = self.count,
                kind = ?err.kind(),
                status = err.status(),
                error = %err,
                "Search failed"
            ),
        }
    }
}

/// One HTTP round trip, recorded by the transport.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
    /// Request body size in bytes
    pub body_size: Option<usize>,
}

impl HttpExchange {
    /// Start describing an exchange.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Record the request body size.
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log the request going out.
    pub fn log_sent(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending HTTP request"
        );
    }

    /// Log a received response of any status.
    pub fn log_received(&self, status: u16, elapsed: Duration, body_size: usize) {
        if (200..300).contains(&status) {
            debug!(
                path = %self.path,
                status,
                elapsed_ms = elapsed.as_millis(),
                body_size,
                "HTTP response received"
            );
        } else {
            warn!(
                path = %self.path,
                status,
                elapsed_ms = elapsed.as_millis(),
                body_size,
                "HTTP response with error status"
            );
        }
    }

    /// Log a request that never produced a response (timeout, refused connection).
    pub fn log_transport_failure(&self, elapsed: Duration, error: &Error) {
        warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms = elapsed.as_millis(),
            timed_out = matches!(error, Error::Timeout(_)),
            error = %error,
            "HTTP request failed before a response was received"
        );
    }
}

/// Log a request field that failed local validation.
pub fn log_validation_error(field: &str, reason: &str) {
    debug!(field, reason, "Search request rejected");
}

/// Log a request that passed local validation.
pub fn log_validation_complete(field_count: usize) {
    debug!(fields_validated = field_count, "Search request accepted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Country, Language, SearchFilters};

    #[test]
    fn test_summary_without_filters() {
        let request = SearchRequest::new("chat", 5).unwrap();
        let summary = SearchSummary::new(&request);
        assert_eq!(
            summary,
            SearchSummary {
                query_len: 4,
                count: 5,
                filter_count: 0,
            }
        );
    }

    #[test]
    fn test_summary_counts_every_filter_entry() {
        let request = SearchRequest::builder()
            .query("chat")
            .filters(
                SearchFilters::new()
                    .language(Language::English)
                    .language(Language::German)
                    .country(Country::UnitedStates)
                    .include_site("a.example")
                    .exclude_site("b.example")
                    .time_range("m7")
                    .extra("safe_search", "strict"),
            )
            .build()
            .unwrap();

        assert_eq!(SearchSummary::new(&request).filter_count, 7);
    }

    #[test]
    fn test_log_outcome_accepts_both_results() {
        let summary = SearchSummary::new(&SearchRequest::new("chat", 5).unwrap());
        summary.log_outcome(Ok(&SearchResponse::default()));
        summary.log_outcome(Err(&Error::Timeout(Duration::from_secs(1))));
    }

    #[test]
    fn test_exchange_body_size() {
        let exchange = HttpExchange::new("POST", "/v1/search");
        assert_eq!(exchange.body_size, None);
        assert_eq!(exchange.with_body_size(64).body_size, Some(64));
    }
}
