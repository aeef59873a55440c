//! Blocking Search Example
//!
//! Uses the synchronous client from plain `main`.
//!
//! Run this example with:
//! ```bash
//! cargo run --example blocking_search --features blocking
//! ```
//!
//! Requires the QUERIT_API_KEY environment variable to be set.

use querit::{SearchRequest, blocking::Client};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("QUERIT_API_KEY")?;
    let client = Client::try_new(api_key)?;

    let response = client.search(SearchRequest::new("rust programming language", 3)?)?;
    for url in response.urls() {
        println!("{}", url);
    }

    Ok(())
}
