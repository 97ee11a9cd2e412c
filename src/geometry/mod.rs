//! Boundary geometry lookup.
//!
//! Fetches the polygon for an OSM identifier. The response is kept as an opaque
//! payload: it is expected to be GeoJSON but is never parsed or validated.

mod client;

use std::future::Future;

pub use client::PolygonsClient;

use crate::error_handling::GeometryError;

/// Raw body returned by the geometry service, stored byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryPayload(Vec<u8>);

impl GeometryPayload {
    /// Wraps raw response bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The payload bytes exactly as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the service returned an empty body.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for GeometryPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for GeometryPayload {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

/// Fetches boundary geometry by OSM identifier.
pub trait GeometrySource {
    /// Returns the raw boundary payload for `osm_id`.
    fn fetch_geometry(
        &self,
        osm_id: u64,
    ) -> impl Future<Output = Result<GeometryPayload, GeometryError>>;
}
