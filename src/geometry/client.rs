//! polygons.openstreetmap.fr client.

use std::sync::Arc;

use reqwest::header::REFERER;
use url::Url;

use super::{GeometryPayload, GeometrySource};
use crate::config::{GEOMETRY_PARAMS, GEOMETRY_PATH};
use crate::error_handling::GeometryError;
use crate::utils::endpoint;

/// Geometry source backed by the `get_geojson.py` endpoint of a polygons service.
#[derive(Debug, Clone)]
pub struct PolygonsClient {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl PolygonsClient {
    /// Creates a client for the polygons service at `base_url`.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the GeoJSON URL for `osm_id`.
    pub fn geometry_url(&self, osm_id: u64) -> Result<Url, url::ParseError> {
        let mut url = endpoint(&self.base_url, GEOMETRY_PATH)?;
        url.query_pairs_mut()
            .append_pair("id", &osm_id.to_string())
            .append_pair("params", GEOMETRY_PARAMS);
        Ok(url)
    }

    /// Builds the referer value: the service's page for the same relation.
    pub fn referer_url(&self, osm_id: u64) -> Result<Url, url::ParseError> {
        let mut url = endpoint(&self.base_url, "")?;
        url.query_pairs_mut().append_pair("id", &osm_id.to_string());
        Ok(url)
    }
}

impl GeometrySource for PolygonsClient {
    async fn fetch_geometry(&self, osm_id: u64) -> Result<GeometryPayload, GeometryError> {
        let url = self.geometry_url(osm_id)?;
        let referer = self.referer_url(osm_id)?;
        log::debug!("Fetching geometry {}", url);

        let response = self
            .client
            .get(url)
            .header(REFERER, referer.as_str())
            .send()
            .await
            .map_err(GeometryError::Transport)?;

        // The body is kept whatever the status; the service answers unknown ids with text.
        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "Geometry service answered {} for OSM id {}, keeping the body as-is",
                status,
                osm_id
            );
        }

        let body = response.bytes().await.map_err(GeometryError::Transport)?;
        log::debug!("Geometry for OSM id {} is {} bytes", osm_id, body.len());

        Ok(GeometryPayload::new(body.to_vec()))
    }
}
