//! Nominatim search client.

use std::sync::Arc;

use reqwest::header::{ACCEPT, REFERER};
use url::Url;

use super::record::{select_city, CityRecord};
use super::Geocoder;
use crate::config::{SEARCH_PATH, SEARCH_REFERER_PATH};
use crate::error_handling::GeocodeError;
use crate::utils::endpoint;

/// Geocoder backed by a Nominatim `search.php` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl NominatimClient {
    /// Creates a client for the Nominatim instance at `base_url`.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the search URL for `name`, percent-encoding the query.
    pub fn search_url(&self, name: &str) -> Result<Url, url::ParseError> {
        let mut url = endpoint(&self.base_url, SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("q", name)
            .append_pair("polygon_geojson", "1")
            .append_pair("format", "jsonv2");
        Ok(url)
    }

    /// Builds the referer value: the search UI page for the same query.
    pub fn referer_url(&self, name: &str) -> Result<Url, url::ParseError> {
        let mut url = endpoint(&self.base_url, SEARCH_REFERER_PATH)?;
        url.query_pairs_mut().append_pair("q", name);
        Ok(url)
    }
}

impl Geocoder for NominatimClient {
    async fn find_city(&self, name: &str) -> Result<Option<CityRecord>, GeocodeError> {
        let url = self.search_url(name)?;
        let referer = self.referer_url(name)?;
        log::debug!("Searching {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(REFERER, referer.as_str())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(GeocodeError::Transport)?;

        let body = response.bytes().await.map_err(GeocodeError::Transport)?;
        let records: Vec<CityRecord> = serde_json::from_slice(&body)?;
        log::debug!("Search for {:?} returned {} results", name, records.len());

        Ok(select_city(records))
    }
}
