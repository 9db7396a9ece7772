//! HTTP client for the REST Countries API

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{TripError, TripResult};
use crate::models::CountryInfo;

use super::response::{normalize, RestCountry};
use super::{CountryLookup, LookupError};

/// Looks countries up by name at `{base_url}/name/{place}`
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    base_url: Url,
    http: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: &str) -> TripResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| TripError::Config(format!("invalid country_api_url: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TripError::Config(format!(
                "invalid country_api_url: {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Build the lookup URL; the place name is percent-encoded as one path segment
    fn endpoint(&self, place: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("name").push(place);
        }
        url
    }
}

#[async_trait]
impl CountryLookup for RestCountriesClient {
    async fn lookup(&self, place: &str) -> Result<CountryInfo, LookupError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(LookupError::NotFound(place.to_string()));
        }

        let endpoint = self.endpoint(place);
        debug!(url = %endpoint, "looking up country");

        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|err| LookupError::Fetch(err.to_string()))?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(place.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Fetch(format!("unexpected status {status}")));
        }

        let countries = res
            .json::<Vec<RestCountry>>()
            .await
            .map_err(|err| LookupError::Fetch(err.to_string()))?;

        countries
            .into_iter()
            .next()
            .map(normalize)
            .ok_or_else(|| LookupError::NotFound(place.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_place() {
        let client = RestCountriesClient::new("https://restcountries.com/v3.1").unwrap();
        assert_eq!(
            client.endpoint("Sweden").as_str(),
            "https://restcountries.com/v3.1/name/Sweden"
        );
        assert_eq!(
            client.endpoint("United States/../x").as_str(),
            "https://restcountries.com/v3.1/name/United%20States%2F..%2Fx"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let client = RestCountriesClient::new("http://localhost:8080/v3.1/").unwrap();
        assert_eq!(
            client.endpoint("Peru").as_str(),
            "http://localhost:8080/v3.1/name/Peru"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            RestCountriesClient::new("not a url"),
            Err(TripError::Config(_))
        ));
        assert!(matches!(
            RestCountriesClient::new("mailto:someone@example.com"),
            Err(TripError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_place_is_not_found_without_request() {
        // Port 9 (discard) is never contacted for a blank name
        let client = RestCountriesClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.lookup("   ").await,
            Err(LookupError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let client = RestCountriesClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.lookup("Sweden").await,
            Err(LookupError::Fetch(_))
        ));
    }
}
