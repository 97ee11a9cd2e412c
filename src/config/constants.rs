//! Configuration constants.
//!
//! Defaults for the input list, output directory, upstream services and
//! request behavior. Every value here can be overridden through `Config`.

/// Input list of city names, one per line.
pub const DEFAULT_INPUT_FILE: &str = "./assets/cities.txt";

/// Directory that receives one `<city>.json` file per city.
pub const DEFAULT_OUTPUT_DIR: &str = "./geoJSON";

/// Extension appended to the city name when writing its boundary file.
pub const OUTPUT_FILE_EXTENSION: &str = "json";

// Geocoding service (Nominatim)
/// Base URL of the Nominatim instance used for city lookups.
pub const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org";
/// Search endpoint path, relative to the search base URL.
pub const SEARCH_PATH: &str = "search.php";
/// Page the referer header points at for a search query.
pub const SEARCH_REFERER_PATH: &str = "ui/search.html";
/// Result classification that marks a search hit as a city.
pub const CITY_CLASSIFICATION: &str = "city";

// Geometry service (polygons.openstreetmap.fr)
/// Base URL of the polygon service that serves boundaries by OSM id.
pub const DEFAULT_GEOMETRY_URL: &str = "http://polygons.openstreetmap.fr";
/// GeoJSON endpoint path, relative to the geometry base URL.
pub const GEOMETRY_PATH: &str = "get_geojson.py";
/// `params` query value requesting the unsimplified polygon.
pub const GEOMETRY_PARAMS: &str = "0";

/// Per-request timeout in seconds.
///
/// Boundary payloads for large cities run to several megabytes and the polygon
/// service generates them on demand, so this is longer than a typical API call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
///
/// Nominatim's usage policy rejects requests without an identifying, browser-like
/// User-Agent. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";
