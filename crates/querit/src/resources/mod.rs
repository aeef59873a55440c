//! API resource endpoints

pub mod search;

pub use search::{Search, SearchRaw};
