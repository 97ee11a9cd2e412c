// Shared test helpers for input files, configs and mock upstream services.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::{Path, PathBuf};

use city_boundaries::{Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// User-Agent sent by test runs, so mocks can assert on it.
#[allow(dead_code)]
pub const TEST_USER_AGENT: &str = "city_boundaries_test/1.0";

/// Writes city names, one per line, to a temporary file.
#[allow(dead_code)]
pub fn write_cities_to_file(cities: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for city in cities {
        writeln!(file, "{}", city).expect("Failed to write city");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Builds a config that talks to `server` for both upstream services.
#[allow(dead_code)]
pub fn create_test_config(input_file: &Path, output_dir: PathBuf, server: &MockServer) -> Config {
    Config {
        file: input_file.to_path_buf(),
        output_dir,
        search_url: server.uri(),
        geometry_url: server.uri(),
        user_agent: TEST_USER_AGENT.to_string(),
        timeout_seconds: 5,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

/// A Nominatim jsonv2 search result.
#[allow(dead_code)]
pub fn search_result(osm_id: u64, place_type: &str, display_name: &str) -> serde_json::Value {
    serde_json::json!({
        "place_id": osm_id + 1_000_000,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0. https://osm.org/copyright",
        "osm_type": "relation",
        "osm_id": osm_id,
        "boundingbox": ["48.8155755", "48.902156", "2.224122", "2.4697602"],
        "lat": "48.8588897",
        "lon": "2.3200410217200766",
        "display_name": display_name,
        "place_rank": 16,
        "category": "place",
        "type": place_type,
        "importance": 0.94,
        "geojson": {"type": "Polygon", "coordinates": [[[2.22, 48.85], [2.23, 48.86], [2.22, 48.85]]]}
    })
}

/// Mounts a search response for `city`.
#[allow(dead_code)]
pub async fn mock_search(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("q", city))
        .and(query_param("polygon_geojson", "1"))
        .and(query_param("format", "jsonv2"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts a geometry response for `osm_id`, expected to be requested `times` times.
#[allow(dead_code)]
pub async fn mock_geometry(server: &MockServer, osm_id: u64, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path("/get_geojson.py"))
        .and(query_param("id", osm_id.to_string()))
        .and(query_param("params", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a catch-all geometry mock that must never be hit.
#[allow(dead_code)]
pub async fn forbid_geometry_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/get_geojson.py"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
