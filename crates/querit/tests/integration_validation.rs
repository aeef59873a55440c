//! Integration tests for request validation
//!
//! Invalid requests must be rejected before anything reaches the network.

use querit::{
    Country, Error, ErrorKind, Language, MAX_COUNT, SearchFilters, SearchRequest,
    validation::validate_search_request,
};
use rstest::rstest;

#[test]
fn test_validation_passes_valid_request() {
    let request = SearchRequest::builder()
        .query("chat")
        .count(5u32)
        .filters(
            SearchFilters::new()
                .language(Language::English)
                .country(Country::UnitedStates)
                .include_site("dictionary.cambridge.org")
                .time_range("m7"),
        )
        .build()
        .expect("Failed to build request");

    assert!(validate_search_request(&request).is_ok());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn test_blank_query_rejected(#[case] query: &str) {
    let err = SearchRequest::new(query, 5).unwrap_err();
    assert!(matches!(err, Error::Validation { status: None, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(MAX_COUNT, true)]
#[case(MAX_COUNT + 1, false)]
fn test_count_bounds(#[case] count: u32, #[case] ok: bool) {
    assert_eq!(SearchRequest::new("chat", count).is_ok(), ok);
}

#[test]
fn test_missing_query_is_validation_error() {
    let err = SearchRequest::builder().count(5u32).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("query"));
}

#[test]
fn test_count_defaults_when_omitted() {
    let request = SearchRequest::builder().query("chat").build().unwrap();
    assert_eq!(request.count(), querit::DEFAULT_COUNT);
}

#[test]
fn test_blank_filter_values_rejected() {
    let blank_range = SearchRequest::builder()
        .query("chat")
        .filters(SearchFilters::new().time_range(" "))
        .build();
    assert!(matches!(blank_range, Err(Error::Validation { .. })));

    let blank_site = SearchRequest::builder()
        .query("chat")
        .filters(SearchFilters::new().exclude_site(""))
        .build();
    assert!(matches!(blank_site, Err(Error::Validation { .. })));
}

#[test]
fn test_unsupported_locale_names_rejected() {
    assert!("klingon".parse::<Language>().is_err());
    assert!("atlantis".parse::<Country>().is_err());
    assert_eq!("english".parse::<Language>().unwrap(), Language::English);
}

#[rstest]
#[case("languages")]
#[case("geo")]
#[case("sites")]
#[case("timeRange")]
fn test_extra_filter_key_cannot_collide_with_typed_filter(#[case] key: &str) {
    let result = SearchRequest::builder()
        .query("chat")
        .filters(SearchFilters::new().language(Language::English).extra(key, "german"))
        .build();
    assert!(matches!(result, Err(Error::Validation { status: None, .. })));
}
