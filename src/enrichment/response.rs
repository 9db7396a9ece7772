//! Raw REST Countries response and its normalization
//!
//! Only the fields the planner shows are modelled; everything else in the
//! payload is ignored. Currency and language maps keep the order the
//! service sent them in, so "first" means first in the response.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::CountryInfo;

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    pub name: RestCountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: Map<String, Value>,
    #[serde(default)]
    pub flags: Option<RestFlags>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCurrency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestFlags {
    #[serde(default)]
    pub png: Option<String>,
}

impl RestCurrency {
    /// "Euro (€)", or just the name when there is no symbol
    fn display(&self) -> String {
        let name = if self.name.trim().is_empty() {
            MISSING
        } else {
            self.name.as_str()
        };

        if self.symbol.is_empty() {
            name.to_string()
        } else {
            format!("{} ({})", name, self.symbol)
        }
    }
}

/// Flatten a raw country record into [`CountryInfo`]
pub fn normalize(country: RestCountry) -> CountryInfo {
    CountryInfo {
        name: country.name.common,
        capital: country
            .capital
            .into_iter()
            .next()
            .unwrap_or_else(|| MISSING.to_string()),
        currency: country
            .currencies
            .into_iter()
            .next()
            .and_then(|(_, value)| serde_json::from_value::<RestCurrency>(value).ok())
            .map(|currency| currency.display())
            .unwrap_or_else(|| MISSING.to_string()),
        flag: country.flags.and_then(|f| f.png).unwrap_or_default(),
        region: country.region,
        population: country.population,
        languages: country
            .languages
            .into_iter()
            .filter_map(|(_, value)| value.as_str().map(str::to_string))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RestCountry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_record() {
        let raw = parse(json!({
            "name": { "common": "Sweden", "official": "Kingdom of Sweden" },
            "capital": ["Stockholm"],
            "currencies": { "SEK": { "name": "Swedish krona", "symbol": "kr" } },
            "flags": { "png": "https://flagcdn.com/w320/se.png", "svg": "https://flagcdn.com/se.svg" },
            "region": "Europe",
            "population": 10353442,
            "languages": { "swe": "Swedish" },
            "area": 450295.0
        }));

        assert_eq!(
            normalize(raw),
            CountryInfo {
                name: "Sweden".into(),
                capital: "Stockholm".into(),
                currency: "Swedish krona (kr)".into(),
                flag: "https://flagcdn.com/w320/se.png".into(),
                region: "Europe".into(),
                population: 10353442,
                languages: vec!["Swedish".into()],
            }
        );
    }

    #[test]
    fn test_currency_without_symbol() {
        let raw = parse(json!({
            "name": { "common": "Somewhere" },
            "currencies": { "XXX": { "name": "Local token" } },
            "region": "Oceania",
            "population": 10
        }));
        assert_eq!(normalize(raw).currency, "Local token");
    }

    #[test]
    fn test_missing_optional_fields() {
        let raw = parse(json!({
            "name": { "common": "Antarctica" },
            "region": "Antarctic",
            "population": 1000
        }));

        let info = normalize(raw);
        assert_eq!(info.capital, "N/A");
        assert_eq!(info.currency, "N/A");
        assert_eq!(info.flag, "");
        assert!(info.languages.is_empty());
    }

    #[test]
    fn test_multiple_languages_in_response_order() {
        let raw = parse(json!({
            "name": { "common": "Switzerland" },
            "languages": { "roh": "Romansh", "fra": "French", "gsw": "Swiss German", "ita": "Italian" },
            "region": "Europe",
            "population": 8654622
        }));

        assert_eq!(
            normalize(raw).languages,
            vec!["Romansh", "French", "Swiss German", "Italian"]
        );
    }

    #[test]
    fn test_first_currency_is_first_in_response() {
        let raw: RestCountry = serde_json::from_str(
            r#"{
                "name": { "common": "Zimbabwe" },
                "currencies": {
                    "USD": { "name": "United States dollar", "symbol": "$" },
                    "BWP": { "name": "Botswana pula", "symbol": "P" }
                },
                "region": "Africa",
                "population": 14862927
            }"#,
        )
        .unwrap();

        assert_eq!(normalize(raw).currency, "United States dollar ($)");
    }
}
