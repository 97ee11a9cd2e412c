//! city_boundaries library: fetch city boundaries as GeoJSON files
//!
//! For each city name in an input list, this library looks the city up on a
//! Nominatim geocoding service, downloads its boundary polygon from a polygons
//! service by OSM identifier, and writes the response body to
//! `<output_dir>/<city>.json`. Cities are processed one at a time, in file order,
//! and a failure for one city never stops the rest of the batch.
//!
//! # Example
//!
//! ```no_run
//! use city_boundaries::{run_fetch, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("cities.txt"),
//!     output_dir: PathBuf::from("./geoJSON"),
//!     ..Default::default()
//! };
//!
//! let report = run_fetch(config).await?;
//! println!("{} of {} cities written", report.written, report.total_cities);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod geocode;
pub mod geometry;
pub mod initialization;
pub mod input;
pub mod pipeline;
pub mod storage;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::ErrorType;
pub use run::{run_fetch, FetchReport};

// Internal run module (wires the real services into the pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::sync::Arc;
    use strum::IntoEnumIterator;

    use crate::app::{log_progress, print_error_statistics, print_summary};
    use crate::config::Config;
    use crate::error_handling::{ErrorType, ProcessingStats};
    use crate::geocode::NominatimClient;
    use crate::geometry::PolygonsClient;
    use crate::initialization::init_client;
    use crate::input::load_cities;
    use crate::pipeline::{CityState, Pipeline};
    use crate::storage::OutputWriter;

    /// Results of a fetch run.
    #[derive(Debug, Clone)]
    pub struct FetchReport {
        /// Number of entries in the input list
        pub total_cities: usize,
        /// Number of cities whose boundary file was written
        pub written: usize,
        /// Number of cities that produced no file
        pub failed: usize,
        /// Directory the files were written to
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Non-zero error counts, in taxonomy order
        pub errors: Vec<(ErrorType, usize)>,
    }

    impl FetchReport {
        /// Number of errors recorded for `error_type`.
        pub fn error_count(&self, error_type: ErrorType) -> usize {
            self.errors
                .iter()
                .find(|(kind, _)| *kind == error_type)
                .map_or(0, |(_, count)| *count)
        }
    }

    /// Runs a fetch with the provided configuration.
    ///
    /// Reads the city list, then geocodes, downloads and writes each city in
    /// order. Per-city failures are logged and counted in the report; they do
    /// not make this function fail. An unreadable input file yields an empty run.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be initialized.
    pub async fn run_fetch(config: Config) -> Result<FetchReport> {
        info!("App started!");
        let start_time = std::time::Instant::now();

        let stats = Arc::new(ProcessingStats::new());
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let cities = load_cities(&config.file, &stats).await;

        let mut pipeline = Pipeline::new(
            NominatimClient::new(Arc::clone(&client), config.search_url.as_str()),
            PolygonsClient::new(client, config.geometry_url.as_str()),
            OutputWriter::new(&config.output_dir, Arc::clone(&stats)),
            Arc::clone(&stats),
        );
        let outcomes = pipeline.run(&cities).await;

        let written = outcomes
            .iter()
            .filter(|outcome| outcome.state() == CityState::Written)
            .count();
        let failed = outcomes.len() - written;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        log_progress(start_time, outcomes.len(), written);
        print_error_statistics(&stats);
        print_summary(cities.len(), written, failed, elapsed_seconds);

        Ok(FetchReport {
            total_cities: cities.len(),
            written,
            failed,
            output_dir: config.output_dir,
            elapsed_seconds,
            errors: ErrorType::iter()
                .map(|error_type| (error_type, stats.get_error_count(error_type)))
                .filter(|(_, count)| *count > 0)
                .collect(),
        })
    }
}
