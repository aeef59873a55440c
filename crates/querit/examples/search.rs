//! Search Example
//!
//! Runs a filtered search and prints the results.
//!
//! Run this example with:
//! ```bash
//! cargo run --example search --features trace -- "rust async runtime"
//! ```
//!
//! Requires the QUERIT_API_KEY environment variable to be set (a `.env` file works too).

use querit::{Client, Country, Language, SearchFilters, SearchRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("querit=debug")),
        )
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chat".to_string());

    let client = Client::from_env()?;

    let request = SearchRequest::builder()
        .query(query)
        .count(5u32)
        .filters(
            SearchFilters::new()
                .language(Language::English)
                .country(Country::UnitedStates)
                .include_site("dictionary.cambridge.org")
                .time_range("m7"),
        )
        .build()?;

    match client.search(request).await {
        Ok(response) => {
            println!("search_id: {:?}", response.search_id);
            for (i, item) in response.iter().enumerate() {
                println!("{}. {}", i + 1, item.title);
                println!("   {}", item.url);
                if let Some(snippet) = &item.snippet {
                    println!("   {}", snippet);
                }
            }
        }
        Err(e) => {
            eprintln!("search failed ({:?}): {}", e.kind(), e);
            if let Some(delay) = e.retry_after() {
                eprintln!("server asked to retry after {:?}", delay);
            }
        }
    }

    Ok(())
}
