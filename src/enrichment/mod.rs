//! Country enrichment for trip destinations
//!
//! A lookup either yields a normalized [`CountryInfo`], reports that the
//! place is unknown, or fails to fetch. Callers that only want decoration go
//! through [`enrich`], which turns both failures into "no enrichment".

pub mod client;
pub mod response;

pub use client::RestCountriesClient;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::error::TripError;
use crate::models::CountryInfo;

/// Why a lookup produced no country
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no country matches '{0}'")]
    NotFound(String),
    #[error("country lookup failed: {0}")]
    Fetch(String),
}

impl From<LookupError> for TripError {
    fn from(err: LookupError) -> Self {
        TripError::Enrichment(err.to_string())
    }
}

/// Source of country metadata keyed by a free-text place name
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn lookup(&self, place: &str) -> Result<CountryInfo, LookupError>;
}

/// Look a place up, degrading any failure to `None`
pub async fn enrich(lookup: &dyn CountryLookup, place: &str) -> Option<CountryInfo> {
    match lookup.lookup(place).await {
        Ok(info) => Some(info),
        Err(err) => {
            warn!(place, error = %err, "no enrichment available");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeLookup;

    #[async_trait]
    impl CountryLookup for FakeLookup {
        async fn lookup(&self, place: &str) -> Result<CountryInfo, LookupError> {
            match place {
                "Sweden" => Ok(CountryInfo {
                    name: "Sweden".into(),
                    capital: "Stockholm".into(),
                    currency: "Swedish krona (kr)".into(),
                    flag: String::new(),
                    region: "Europe".into(),
                    population: 10353442,
                    languages: vec!["Swedish".into()],
                }),
                "Offline" => Err(LookupError::Fetch("connection refused".into())),
                other => Err(LookupError::NotFound(other.into())),
            }
        }
    }

    #[tokio::test]
    async fn test_enrich_success() {
        let info = enrich(&FakeLookup, "Sweden").await.unwrap();
        assert_eq!(info.capital, "Stockholm");
    }

    #[tokio::test]
    async fn test_enrich_degrades_failures() {
        assert!(enrich(&FakeLookup, "Atlantis").await.is_none());
        assert!(enrich(&FakeLookup, "Offline").await.is_none());
    }

    #[test]
    fn test_lookup_error_kinds_stay_distinct() {
        let not_found = LookupError::NotFound("Atlantis".into());
        let fetch = LookupError::Fetch("timeout".into());
        assert_ne!(not_found, fetch);
        assert_eq!(not_found.to_string(), "no country matches 'Atlantis'");

        let err: TripError = fetch.into();
        assert_eq!(err.to_string(), "Enrichment error: country lookup failed: timeout");
    }
}
