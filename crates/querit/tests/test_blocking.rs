//! Tests for the blocking client

#![cfg(feature = "blocking")]

mod common;

use querit::{ClientConfig, Error, SearchRequest, blocking};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn start_server(status: u16, body: String) -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    });
    (runtime, server)
}

#[test]
fn test_blocking_search() {
    let (_runtime, server) = start_server(200, common::load_response_fixture("search_two_results"));

    let config = ClientConfig {
        base_url: Some(server.uri()),
        ..ClientConfig::with_api_key(common::test_api_key())
    };
    let client = blocking::Client::from_config(config).unwrap();

    let response = client.search(SearchRequest::new("chat", 5).unwrap()).unwrap();
    assert_eq!(response.len(), 2);

    let raw = client.search_raw(SearchRequest::new("chat", 5).unwrap()).unwrap();
    assert_eq!(raw.status_code(), 200);
}

#[test]
fn test_blocking_search_error() {
    let (_runtime, server) = start_server(401, "denied".to_string());

    let config = ClientConfig {
        base_url: Some(server.uri()),
        ..ClientConfig::with_api_key(common::test_api_key())
    };
    let client = blocking::Client::from_config(config).unwrap();

    let err = client.search(SearchRequest::new("chat", 5).unwrap()).unwrap_err();
    assert!(matches!(err, Error::Authentication { status: 401, .. }));
}
