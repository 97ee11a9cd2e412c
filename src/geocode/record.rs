//! Search result model.

use serde::{Deserialize, Serialize};

use crate::config::CITY_CLASSIFICATION;

/// One result of a Nominatim `format=jsonv2` search.
///
/// Only `osm_id`, `display_name`, `place_type` and `geojson` are consumed by the
/// pipeline. The other attributes are part of the upstream response shape and are
/// kept so a record round-trips without loss. Every field is optional because
/// Nominatim omits attributes it has no data for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Nominatim's internal place id.
    #[serde(default)]
    pub place_id: Option<u64>,
    /// Data licence notice.
    #[serde(default)]
    pub licence: Option<String>,
    /// OSM element kind: `node`, `way` or `relation`.
    #[serde(default)]
    pub osm_type: Option<String>,
    /// Administrative identifier used to look up the boundary.
    #[serde(default)]
    pub osm_id: Option<u64>,
    /// South, north, west, east edges as decimal strings.
    #[serde(default)]
    pub boundingbox: Vec<String>,
    /// Latitude of the centroid.
    #[serde(default)]
    pub lat: Option<String>,
    /// Longitude of the centroid.
    #[serde(default)]
    pub lon: Option<String>,
    /// Full human-readable name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Address rank, lower is larger.
    #[serde(default)]
    pub place_rank: Option<u32>,
    /// Main OSM tag key, e.g. `place` or `boundary`.
    #[serde(default)]
    pub category: Option<String>,
    /// Classification tag, `"city"` for the results this pipeline wants.
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    /// Search ranking score.
    #[serde(default)]
    pub importance: Option<f64>,
    /// Map icon URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Polygon embedded in the search result (`polygon_geojson=1`).
    ///
    /// Not used for output: the geometry service's response is stored instead.
    #[serde(default)]
    pub geojson: Option<GeometryDescriptor>,
}

/// GeoJSON geometry embedded in a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDescriptor {
    /// GeoJSON geometry type, e.g. `Polygon`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Nesting depth varies with `kind`, so coordinates stay untyped.
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl CityRecord {
    /// Whether the result is classified as a city.
    pub fn is_city(&self) -> bool {
        self.place_type.as_deref() == Some(CITY_CLASSIFICATION)
    }
}

/// Picks the first result classified as a city.
pub fn select_city(records: Vec<CityRecord>) -> Option<CityRecord> {
    records.into_iter().find(CityRecord::is_city)
}
