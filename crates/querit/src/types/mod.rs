//! Request and response types for the Querit Search API

pub mod locale;
pub mod request;
pub mod response;

pub use locale::{Country, Language};
pub use request::{
    DEFAULT_COUNT, MAX_COUNT, SearchFilters, SearchRequest, SearchRequestBuilder, SiteFilter,
};
pub use response::{SearchResponse, SearchResultItem};
