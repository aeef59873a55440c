//! Property-based tests for request construction
//!
//! Uses proptest to check the invariants of `SearchRequest` across a wide
//! range of generated inputs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::error::Error;
    use crate::types::{Country, Language, MAX_COUNT, SearchFilters, SearchRequest};

    // ===== Strategy Generators =====

    fn arb_query() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9 ]{0,99}"
    }

    fn arb_count() -> impl Strategy<Value = u32> {
        1u32..=MAX_COUNT
    }

    fn arb_blank() -> impl Strategy<Value = String> {
        "[ \t\n]{0,10}"
    }

    // ===== Search Request Properties =====

    proptest! {
        /// Property: valid query/count pairs build and round-trip unchanged
        #[test]
        fn prop_valid_request_round_trips(query in arb_query(), count in arb_count()) {
            let request = SearchRequest::new(query.clone(), count).expect("valid request");

            prop_assert_eq!(request.query(), query.as_str());
            prop_assert_eq!(request.count(), count);

            let json = serde_json::to_value(&request).expect("serializable");
            prop_assert_eq!(json["query"].as_str(), Some(query.as_str()));
            prop_assert_eq!(json["count"].as_u64(), Some(u64::from(count)));
            prop_assert!(json.get("filters").is_none());
        }

        /// Property: blank queries are always rejected client-side
        #[test]
        fn prop_blank_query_rejected(query in arb_blank(), count in arb_count()) {
            let result = SearchRequest::new(query, count);
            let is_client_validation = matches!(result, Err(Error::Validation { status: None, .. }));
            prop_assert!(is_client_validation);
        }

        /// Property: counts above the maximum are always rejected
        #[test]
        fn prop_count_over_max_rejected(count in (MAX_COUNT + 1)..u32::MAX) {
            prop_assert!(SearchRequest::new("q", count).is_err());
        }

        /// Property: the filter payload lists languages and countries in insertion order
        #[test]
        fn prop_filter_order_preserved(
            langs in proptest::collection::vec(proptest::sample::select(Language::ALL.to_vec()), 1..5),
            countries in proptest::collection::vec(proptest::sample::select(Country::ALL.to_vec()), 1..5),
        ) {
            let filters = langs
                .iter()
                .fold(SearchFilters::new(), |f, l| f.language(*l));
            let filters = countries.iter().fold(filters, |f, c| f.country(*c));

            let json = serde_json::to_value(&filters).expect("serializable");
            let sent_langs: Vec<&str> = json["languages"]["include"]
                .as_array()
                .expect("languages array")
                .iter()
                .filter_map(|v| v.as_str())
                .collect();
            let expected: Vec<&str> = langs.iter().map(|l| l.as_str()).collect();
            prop_assert_eq!(sent_langs, expected);

            let sent_countries = json["geo"]["countries"]["include"]
                .as_array()
                .expect("countries array")
                .len();
            prop_assert_eq!(sent_countries, countries.len());
        }
    }
}
