//! Language and country values accepted by search filters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Languages the search service can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    English,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
    /// German
    German,
    /// French
    French,
    /// Spanish
    Spanish,
    /// Portuguese
    Portuguese,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Portuguese,
    ];

    /// Wire value of this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| Error::validation(format!("Unsupported language: {}", s)))
    }
}

/// Countries or regions the search service can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// Argentina
    #[serde(rename = "argentina")]
    Argentina,
    /// Australia
    #[serde(rename = "australia")]
    Australia,
    /// Brazil
    #[serde(rename = "brazil")]
    Brazil,
    /// Canada
    #[serde(rename = "canada")]
    Canada,
    /// Colombia
    #[serde(rename = "colombia")]
    Colombia,
    /// France
    #[serde(rename = "france")]
    France,
    /// Germany
    #[serde(rename = "germany")]
    Germany,
    /// India
    #[serde(rename = "india")]
    India,
    /// Indonesia
    #[serde(rename = "indonesia")]
    Indonesia,
    /// Japan
    #[serde(rename = "japan")]
    Japan,
    /// Mexico
    #[serde(rename = "mexico")]
    Mexico,
    /// Nigeria
    #[serde(rename = "nigeria")]
    Nigeria,
    /// Philippines
    #[serde(rename = "philippines")]
    Philippines,
    /// South Korea
    #[serde(rename = "south korea")]
    SouthKorea,
    /// Spain
    #[serde(rename = "spain")]
    Spain,
    /// United Kingdom
    #[serde(rename = "united kingdom")]
    UnitedKingdom,
    /// United States
    #[serde(rename = "united states")]
    UnitedStates,
}

impl Country {
    /// All supported countries.
    pub const ALL: [Country; 17] = [
        Country::Argentina,
        Country::Australia,
        Country::Brazil,
        Country::Canada,
        Country::Colombia,
        Country::France,
        Country::Germany,
        Country::India,
        Country::Indonesia,
        Country::Japan,
        Country::Mexico,
        Country::Nigeria,
        Country::Philippines,
        Country::SouthKorea,
        Country::Spain,
        Country::UnitedKingdom,
        Country::UnitedStates,
    ];

    /// Wire value of this country.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Argentina => "argentina",
            Country::Australia => "australia",
            Country::Brazil => "brazil",
            Country::Canada => "canada",
            Country::Colombia => "colombia",
            Country::France => "france",
            Country::Germany => "germany",
            Country::India => "india",
            Country::Indonesia => "indonesia",
            Country::Japan => "japan",
            Country::Mexico => "mexico",
            Country::Nigeria => "nigeria",
            Country::Philippines => "philippines",
            Country::SouthKorea => "south korea",
            Country::Spain => "spain",
            Country::UnitedKingdom => "united kingdom",
            Country::UnitedStates => "united states",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| Error::validation(format!("Unsupported country: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_values_match_serde() {
        for lang in Language::ALL {
            let json = serde_json::to_value(lang).unwrap();
            assert_eq!(json, lang.as_str());
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_country_wire_values_match_serde() {
        for country in Country::ALL {
            let json = serde_json::to_value(country).unwrap();
            assert_eq!(json, country.as_str());
            assert_eq!(country.as_str().parse::<Country>().unwrap(), country);
        }
    }

    #[test]
    fn test_unsupported_values_are_validation_errors() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::Validation { status: None, .. }));
        assert!(err.to_string().contains("Unsupported language: klingon"));

        let err = "atlantis".parse::<Country>().unwrap_err();
        assert!(err.to_string().contains("Unsupported country: atlantis"));
    }

    #[test]
    fn test_multi_word_country() {
        assert_eq!(
            "south korea".parse::<Country>().unwrap(),
            Country::SouthKorea
        );
        assert_eq!(Country::UnitedStates.to_string(), "united states");
    }
}
