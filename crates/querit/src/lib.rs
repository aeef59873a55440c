//! # Querit SDK
//!
//! Rust SDK for the Querit Search API:
//! - Validated, immutable search requests with language, country, site and time filters
//! - Typed search responses that keep unknown fields
//! - A small error taxonomy (authentication, validation, everything else)
//! - Bearer-token auth, per-request timeout and proxy support
//!
//! The client performs exactly one HTTP attempt per search. Retrying, caching
//! and rate limiting are left to the caller; [`Error::is_retryable`] helps
//! decide when a retry makes sense.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use querit::{Client, Country, Language, SearchFilters, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::try_new("querit-sk-...")?;
//!
//!     let request = SearchRequest::builder()
//!         .query("chat")
//!         .count(5u32)
//!         .filters(
//!             SearchFilters::new()
//!                 .language(Language::English)
//!                 .country(Country::UnitedStates)
//!                 .include_site("dictionary.cambridge.org")
//!                 .time_range("m7"),
//!         )
//!         .build()?;
//!
//!     let response = client.search(request).await?;
//!     for item in &response {
//!         println!("{}", item.url);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, QueritClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use crate::http::RawResponse;
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;
pub mod validation;

// Optional blocking client
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use querit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, ErrorKind, Result,
        types::{
            Country, Language, SearchFilters, SearchRequest, SearchResponse, SearchResultItem,
            SiteFilter,
        },
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.querit.ai";

/// Default path of the search endpoint
pub const DEFAULT_SEARCH_PATH: &str = "/v1/search";

/// Default timeout for a single request
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[cfg(test)]
mod property_tests;
