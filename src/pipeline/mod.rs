//! Pipeline driver.
//!
//! Walks the city list in order and moves each city through
//! `Pending -> Geocoded -> GeometryFetched -> Written`, or to `Failed` from any
//! step. A city is finished before the next one starts, and a failed city never
//! stops the batch.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::app::log_city_start;
use crate::error_handling::{transport_kind_of, CityError, ProcessingStats};
use crate::geocode::Geocoder;
use crate::geometry::GeometrySource;
use crate::storage::PayloadSink;

/// Processing state of a single city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityState {
    /// Taken from the list, nothing fetched yet.
    Pending,
    /// A city record with an OSM id was found.
    Geocoded,
    /// The boundary payload was downloaded.
    GeometryFetched,
    /// The payload is on disk.
    Written,
    /// Processing stopped; no file was written for this city.
    Failed,
}

/// Result of processing one city.
#[derive(Debug)]
pub struct CityOutcome {
    /// City name as given in the input.
    pub city: String,
    /// Furthest non-terminal state reached.
    pub reached: CityState,
    /// Output file on success, the failure otherwise.
    pub result: Result<PathBuf, CityError>,
}

impl CityOutcome {
    /// Terminal state: `Written` or `Failed`.
    pub fn state(&self) -> CityState {
        if self.result.is_ok() {
            CityState::Written
        } else {
            CityState::Failed
        }
    }
}

/// Sequential geocode -> geometry -> write driver.
///
/// Collaborators are injected so the driver can run against stubs.
pub struct Pipeline<G, S, W> {
    geocoder: G,
    geometry: S,
    sink: W,
    stats: Arc<ProcessingStats>,
}

impl<G, S, W> Pipeline<G, S, W>
where
    G: Geocoder,
    S: GeometrySource,
    W: PayloadSink,
{
    /// Creates a driver; failures are counted in `stats`.
    pub fn new(geocoder: G, geometry: S, sink: W, stats: Arc<ProcessingStats>) -> Self {
        Self {
            geocoder,
            geometry,
            sink,
            stats,
        }
    }

    /// Processes every city in order, one at a time.
    pub async fn run(&mut self, cities: &[String]) -> Vec<CityOutcome> {
        let mut outcomes = Vec::with_capacity(cities.len());
        for (index, city) in cities.iter().enumerate() {
            log_city_start(index, cities.len(), city);
            outcomes.push(self.process_city(city).await);
        }
        outcomes
    }

    /// Processes a single city to a terminal state.
    ///
    /// Failures are logged and counted here; the returned outcome carries the error.
    pub async fn process_city(&mut self, city: &str) -> CityOutcome {
        let mut reached = CityState::Pending;
        let result = self.advance(city, &mut reached).await;

        match &result {
            Ok(path) => debug!("{} -> {}", city, path.display()),
            Err(e) => {
                self.stats.increment_error(e.error_type());
                match transport_kind_of(e) {
                    Some(kind) => warn!("Skipping {:?} ({:?}): {} [{}]", city, reached, e, kind),
                    None => warn!("Skipping {:?} ({:?}): {}", city, reached, e),
                }
            }
        }

        CityOutcome {
            city: city.to_string(),
            reached,
            result,
        }
    }

    async fn advance(&mut self, city: &str, reached: &mut CityState) -> Result<PathBuf, CityError> {
        let record = self
            .geocoder
            .find_city(city)
            .await?
            .ok_or(CityError::NotFound)?;
        let osm_id = record.osm_id.ok_or(CityError::MissingIdentifier)?;
        *reached = CityState::Geocoded;
        debug!(
            "{:?} resolved to OSM id {} ({})",
            city,
            osm_id,
            record.display_name.as_deref().unwrap_or("no display name")
        );

        let payload = self.geometry.fetch_geometry(osm_id).await?;
        *reached = CityState::GeometryFetched;
        if payload.is_empty() {
            debug!("Geometry for {:?} is empty, writing it anyway", city);
        }

        Ok(self.sink.write_payload(city, &payload).await?)
    }
}
