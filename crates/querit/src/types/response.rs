//! Search response types

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Response returned by the search endpoint.
///
/// Unknown top-level fields are ignored so that additions on the server side
/// do not break older clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Result items in the order the service ranked them
    #[serde(default, deserialize_with = "deserialize_results")]
    pub results: Vec<SearchResultItem>,

    /// Identifier the service assigned to this search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_id: Option<i64>,

    /// Service-level error code, if one was reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,

    /// Service-level error message, if one was reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl SearchResponse {
    /// Number of result items.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over result items in ranking order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchResultItem> {
        self.results.iter()
    }

    /// URLs of all result items, in ranking order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|item| item.url.as_str())
    }
}

impl IntoIterator for SearchResponse {
    type Item = SearchResultItem;
    type IntoIter = std::vec::IntoIter<SearchResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResponse {
    type Item = &'a SearchResultItem;
    type IntoIter = std::slice::Iter<'a, SearchResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// The service wraps results as `{"result": [...]}`; a bare array and `null`
/// are accepted too. Errors inside an item are reported as-is.
struct ResultsVisitor;

impl<'de> Visitor<'de> for ResultsVisitor {
    type Value = Vec<SearchResultItem>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of results or an object with a `result` list")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<SearchResultItem>()? {
            items.push(item);
        }
        Ok(items)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut items = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "result" {
                if items.is_some() {
                    return Err(de::Error::duplicate_field("result"));
                }
                items = Some(map.next_value::<Option<Vec<SearchResultItem>>>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(items.flatten().unwrap_or_default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

fn deserialize_results<'de, D>(deserializer: D) -> Result<Vec<SearchResultItem>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(ResultsVisitor)
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Page title
    pub title: String,

    /// Page URL
    pub url: String,

    /// Text excerpt matching the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Publish time as a Unix timestamp in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_time: Option<i64>,

    /// Human-readable page age
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_age: Option<String>,

    /// Site display type identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_display_type: Option<i64>,

    /// Language identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<i64>,

    /// Site authority level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_auth_level: Option<i64>,

    /// Image metadata for the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_images: Option<serde_json::Value>,

    /// Any other fields the service returned
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SearchResultItem {
    /// Parse `url`, returning `None` if it is not a well-formed absolute URL.
    pub fn parsed_url(&self) -> Option<url::Url> {
        url::Url::parse(&self.url).ok()
    }

    /// `page_time` as a UTC timestamp.
    pub fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.page_time
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
    }

    /// Look up a field the SDK does not model explicitly.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_results() {
        let body = json!({
            "search_id": 42,
            "error_code": 0,
            "results": {"result": [
                {"title": "A", "url": "https://a.example"},
                {"title": "B", "url": "https://b.example"}
            ]}
        });
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.search_id, Some(42));
        assert_eq!(response.urls().collect::<Vec<_>>(), ["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_bare_array_results() {
        let body = json!({"results": [{"title": "A", "url": "https://a.example"}]});
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results[0].title, "A");
    }

    #[test]
    fn test_missing_or_null_results() {
        for body in [json!({}), json!({"results": null}), json!({"results": {}})] {
            let response: SearchResponse = serde_json::from_value(body).unwrap();
            assert!(response.is_empty());
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored_or_kept() {
        let body = json!({
            "took_ms": 12,
            "results": [{
                "title": "A",
                "url": "https://a.example/page",
                "snippet": "hello",
                "page_time": 1_700_000_000,
                "rank_score": 0.9
            }]
        });
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let item = &response.results[0];
        assert_eq!(item.snippet.as_deref(), Some("hello"));
        assert_eq!(item.get("rank_score"), Some(&json!(0.9)));
        assert_eq!(item.parsed_url().unwrap().host_str(), Some("a.example"));
        assert_eq!(item.published_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_relative_url_does_not_parse() {
        let item: SearchResultItem =
            serde_json::from_value(json!({"title": "t", "url": "/relative"})).unwrap();
        assert!(item.parsed_url().is_none());
    }

    #[test]
    fn test_item_without_url_is_rejected() {
        for body in [
            json!({"results": [{"title": "A"}]}),
            json!({"results": {"result": [{"title": "A", "url": "https://a.example"}, {"title": "B"}]}}),
        ] {
            let err = serde_json::from_value::<SearchResponse>(body).unwrap_err();
            assert!(
                err.to_string().contains("missing field `url`"),
                "error should name the field, got: {err}"
            );
        }
    }

    #[test]
    fn test_results_of_wrong_shape_rejected() {
        let err = serde_json::from_value::<SearchResponse>(json!({"results": "none"})).unwrap_err();
        assert!(err.to_string().contains("`result` list"), "{err}");
    }
}
