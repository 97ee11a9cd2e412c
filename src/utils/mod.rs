//! Small helpers shared by the HTTP clients.

use url::Url;

/// Joins `path` onto the service base URL.
///
/// A trailing slash on `base` is ignored, so `http://host` and `http://host/`
/// produce the same endpoint. Any path already on the base is kept, which lets a
/// service be hosted below a prefix.
pub fn endpoint(base: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_with_and_without_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:1234", "search.php").unwrap().as_str(),
            "http://localhost:1234/search.php"
        );
        assert_eq!(
            endpoint("http://localhost:1234/", "search.php").unwrap().as_str(),
            "http://localhost:1234/search.php"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        assert_eq!(
            endpoint("https://example.org/nominatim", "search.php")
                .unwrap()
                .as_str(),
            "https://example.org/nominatim/search.php"
        );
    }

    #[test]
    fn test_endpoint_rejects_relative_base() {
        assert!(endpoint("nominatim", "search.php").is_err());
    }
}
