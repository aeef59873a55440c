//! HTTP transport layer
//!
//! Request building, response handling and the [`HttpProvider`] seam the
//! client sends through.

pub use provider::HttpProvider;
pub use querit_provider::{QueritHttpProvider, QueritHttpProviderBuilder};
pub use request::RequestBuilder;
pub use response::{RawResponse, Response};

pub mod provider;
mod querit_provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
