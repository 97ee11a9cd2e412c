//! City geocoding.
//!
//! Resolves a city name to the first search result classified as a city,
//! which carries the OSM identifier the geometry lookup needs.

mod client;
mod record;

use std::future::Future;

pub use client::NominatimClient;
pub use record::{select_city, CityRecord, GeometryDescriptor};

use crate::error_handling::GeocodeError;

/// Looks up a city by name.
pub trait Geocoder {
    /// Returns the first result classified as a city, or `None` if there is none.
    ///
    /// Transport failures and unparseable responses are errors, never `None`.
    fn find_city(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<CityRecord>, GeocodeError>>;
}
