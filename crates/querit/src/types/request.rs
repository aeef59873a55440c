//! Search request types

use derive_builder::Builder;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::locale::{Country, Language};
use crate::error::{Error, Result};

/// Number of results requested when `count` is not set.
pub const DEFAULT_COUNT: u32 = 10;

/// Largest `count` accepted by the search endpoint.
pub const MAX_COUNT: u32 = 100;

/// A validated search request.
///
/// Requests are immutable once built. Both [`SearchRequest::new`] and the
/// builder check that the query is non-empty and that `count` lies in
/// `1..=MAX_COUNT`, failing with [`Error::Validation`] otherwise.
///
/// # Example
///
/// ```rust
/// use querit::{Language, SearchFilters, SearchRequest};
///
/// let request = SearchRequest::builder()
///     .query("chat")
///     .count(5u32)
///     .filters(SearchFilters::new().language(Language::English))
///     .build()?;
///
/// assert_eq!(request.query(), "chat");
/// assert_eq!(request.count(), 5);
/// # Ok::<(), querit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "crate::error::Error"))]
pub struct SearchRequest {
    /// The search query text
    #[builder(setter(into))]
    query: String,

    /// Maximum number of results to return
    #[builder(default = "DEFAULT_COUNT")]
    count: u32,

    /// Filter conditions
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "filters_are_empty")]
    filters: Option<SearchFilters>,
}

impl SearchRequest {
    /// Create a request builder.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Create a request without filters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the query is empty or `count` is out of range.
    pub fn new(query: impl Into<String>, count: u32) -> Result<Self> {
        Self::builder().query(query).count(count).build()
    }

    /// The search query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Maximum number of results to return.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Filter conditions, if any.
    pub fn filters(&self) -> Option<&SearchFilters> {
        self.filters.as_ref()
    }
}

impl SearchRequestBuilder {
    fn validate(&self) -> Result<()> {
        if let Some(query) = &self.query {
            validate_query(query)?;
        }
        validate_count(self.count.unwrap_or(DEFAULT_COUNT))?;
        if let Some(Some(filters)) = &self.filters {
            filters.validate()?;
        }
        Ok(())
    }
}

pub(crate) fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::validation("query cannot be empty"));
    }
    Ok(())
}

pub(crate) fn validate_count(count: u32) -> Result<()> {
    if count == 0 {
        return Err(Error::validation("count must be greater than 0"));
    }
    if count > MAX_COUNT {
        return Err(Error::validation(format!(
            "count ({}) exceeds maximum allowed value ({})",
            count, MAX_COUNT
        )));
    }
    Ok(())
}

fn filters_are_empty(filters: &Option<SearchFilters>) -> bool {
    filters.as_ref().is_none_or(SearchFilters::is_empty)
}

/// Sites to include in or exclude from results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteFilter {
    /// Domains that results must come from
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Domains that results must not come from
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl SiteFilter {
    /// True when neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Filters narrowing a search.
///
/// Serialized in the nested layout the service expects:
///
/// ```json
/// {
///   "languages": {"include": ["english"]},
///   "geo": {"countries": {"include": ["united states"]}},
///   "sites": {"include": ["dictionary.cambridge.org"]},
///   "timeRange": {"date": "m7"}
/// }
/// ```
///
/// Entries added with [`SearchFilters::extra`] are written as-is next to the
/// typed filters. Their keys may not reuse `languages`, `geo`, `sites` or
/// `timeRange`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Result languages to include
    pub languages: Vec<Language>,
    /// Countries to include
    pub countries: Vec<Country>,
    /// Site include/exclude lists
    pub sites: SiteFilter,
    /// Time range expression, e.g. `"m7"`
    pub time_range: Option<String>,
    /// Additional filter keys passed through unmodified
    pub extra: BTreeMap<String, String>,
}

impl SearchFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include results in this language.
    pub fn language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }

    /// Include results from this country.
    pub fn country(mut self, country: Country) -> Self {
        self.countries.push(country);
        self
    }

    /// Only return results from this site.
    pub fn include_site(mut self, site: impl Into<String>) -> Self {
        self.sites.include.push(site.into());
        self
    }

    /// Never return results from this site.
    pub fn exclude_site(mut self, site: impl Into<String>) -> Self {
        self.sites.exclude.push(site.into());
        self
    }

    /// Restrict results to a time range such as `"m7"`.
    pub fn time_range(mut self, range: impl Into<String>) -> Self {
        self.time_range = Some(range.into());
        self
    }

    /// Add a raw filter entry.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// True when no filter would be sent.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.countries.is_empty()
            && self.sites.is_empty()
            && self.time_range.is_none()
            && self.extra.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(range) = &self.time_range
            && range.trim().is_empty()
        {
            return Err(Error::validation("time_range cannot be blank"));
        }
        if self.extra.keys().any(|k| k.trim().is_empty()) {
            return Err(Error::validation("filter keys cannot be blank"));
        }
        if let Some(key) = self
            .extra
            .keys()
            .find(|k| RESERVED_FILTER_KEYS.contains(&k.as_str()))
        {
            return Err(Error::validation(format!(
                "filter key `{}` is reserved for a typed filter",
                key
            )));
        }
        if self
            .sites
            .include
            .iter()
            .chain(&self.sites.exclude)
            .any(|s| s.trim().is_empty())
        {
            return Err(Error::validation("site filters cannot contain blank domains"));
        }
        Ok(())
    }
}

/// Keys written by the typed filters; `extra` may not reuse them.
const RESERVED_FILTER_KEYS: [&str; 4] = ["languages", "geo", "sites", "timeRange"];

#[derive(Serialize)]
struct Include<'a, T> {
    include: &'a [T],
}

#[derive(Serialize)]
struct Geo<'a> {
    countries: Include<'a, Country>,
}

#[derive(Serialize)]
struct DateRange<'a> {
    date: &'a str,
}

impl Serialize for SearchFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if !self.languages.is_empty() {
            map.serialize_entry(
                "languages",
                &Include {
                    include: &self.languages,
                },
            )?;
        }
        if !self.countries.is_empty() {
            map.serialize_entry(
                "geo",
                &Geo {
                    countries: Include {
                        include: &self.countries,
                    },
                },
            )?;
        }
        if !self.sites.is_empty() {
            map.serialize_entry("sites", &self.sites)?;
        }
        if let Some(range) = &self.time_range {
            map.serialize_entry("timeRange", &DateRange { date: range })?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_round_trips_fields() {
        let request = SearchRequest::new("chat", 5).unwrap();
        assert_eq!(request.query(), "chat");
        assert_eq!(request.count(), 5);
        assert!(request.filters().is_none());
    }

    #[test]
    fn test_default_count() {
        let request = SearchRequest::builder().query("rust").build().unwrap();
        assert_eq!(request.count(), DEFAULT_COUNT);
    }

    #[test]
    fn test_empty_query_rejected() {
        for query in ["", "   ", "\n\t"] {
            let err = SearchRequest::new(query, 5).unwrap_err();
            assert!(matches!(err, Error::Validation { status: None, .. }));
        }
    }

    #[test]
    fn test_missing_query_rejected() {
        let err = SearchRequest::builder().count(3u32).build().unwrap_err();
        match err {
            Error::Validation { message, .. } => assert!(message.contains("query")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_count_bounds() {
        assert!(SearchRequest::new("q", 0).is_err());
        assert!(SearchRequest::new("q", 1).is_ok());
        assert!(SearchRequest::new("q", MAX_COUNT).is_ok());
        assert!(SearchRequest::new("q", MAX_COUNT + 1).is_err());
    }

    #[test]
    fn test_payload_without_filters() {
        let request = SearchRequest::new("chat", 5).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "chat", "count": 5})
        );
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let request = SearchRequest::builder()
            .query("chat")
            .filters(SearchFilters::new())
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "chat", "count": 10})
        );
    }

    #[test]
    fn test_full_filter_payload() {
        let filters = SearchFilters::new()
            .language(Language::English)
            .country(Country::UnitedStates)
            .include_site("dictionary.cambridge.org")
            .time_range("m7");
        let request = SearchRequest::builder()
            .query("chat")
            .count(5u32)
            .filters(filters)
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "chat",
                "count": 5,
                "filters": {
                    "languages": {"include": ["english"]},
                    "geo": {"countries": {"include": ["united states"]}},
                    "sites": {"include": ["dictionary.cambridge.org"]},
                    "timeRange": {"date": "m7"}
                }
            })
        );
    }

    #[test]
    fn test_site_exclude_only() {
        let filters = SearchFilters::new().exclude_site("example.com");
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({"sites": {"exclude": ["example.com"]}})
        );
    }

    #[test]
    fn test_extra_filters_pass_through() {
        let filters = SearchFilters::new()
            .extra("safe_search", "strict")
            .extra("region", "eu");
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({"region": "eu", "safe_search": "strict"})
        );
    }

    #[test]
    fn test_blank_filter_values_rejected() {
        let err = SearchRequest::builder()
            .query("chat")
            .filters(SearchFilters::new().time_range(" "))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("time_range"));

        let err = SearchRequest::builder()
            .query("chat")
            .filters(SearchFilters::new().extra("", "x"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("filter keys"));
    }

    #[test]
    fn test_extra_cannot_shadow_typed_filters() {
        for key in RESERVED_FILTER_KEYS {
            let err = SearchRequest::builder()
                .query("chat")
                .filters(
                    SearchFilters::new()
                        .language(Language::English)
                        .extra(key, "german"),
                )
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::Validation { status: None, .. }));
            assert!(err.to_string().contains(key), "{err}");
        }

        // Case differs from the wire name, so this is a distinct key.
        assert!(SearchFilters::new().extra("Languages", "x").validate().is_ok());
    }
}
