//! Request validation for the Querit SDK
//!
//! [`SearchRequest`] already validates itself when built. The search resource
//! runs [`validate_search_request`] once more right before sending, so that
//! nothing malformed reaches the wire and every rejection is logged the same
//! way.
//!
//! # Examples
//!
//! ```rust
//! use querit::SearchRequest;
//! use querit::validation::validate_search_request;
//!
//! let request = SearchRequest::new("chat", 5)?;
//! validate_search_request(&request)?;
//! # Ok::<(), querit::Error>(())
//! ```

use crate::error::Result;
use crate::observability::{log_validation_complete, log_validation_error};
use crate::types::SearchRequest;
use crate::types::request::{validate_count, validate_query};

/// Validate a [`SearchRequest`] before sending it to the API.
///
/// # Errors
///
/// Returns [`crate::Error::Validation`] describing the first invalid field.
pub fn validate_search_request(request: &SearchRequest) -> Result<()> {
    validate_query(request.query()).inspect_err(|e| log_validation_error("query", &e.to_string()))?;
    validate_count(request.count()).inspect_err(|e| log_validation_error("count", &e.to_string()))?;

    let mut fields = 2;
    if let Some(filters) = request.filters() {
        filters
            .validate()
            .inspect_err(|e| log_validation_error("filters", &e.to_string()))?;
        fields += 1;
    }

    log_validation_complete(fields);
    Ok(())
}
