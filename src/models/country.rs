//! Country metadata used to enrich a trip's destination

use serde::{Deserialize, Serialize};

/// Flat, display-ready description of a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Common country name
    pub name: String,

    /// Capital city, or "N/A"
    pub capital: String,

    /// Currency name, with its symbol in parentheses when one exists
    pub currency: String,

    /// Flag image URL, empty when unavailable
    pub flag: String,

    pub region: String,

    pub population: u64,

    /// Language names
    pub languages: Vec<String>,
}
