//! Error type definitions.
//!
//! This module defines the typed errors raised by each pipeline stage and the
//! error/info categories counted during a run.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of the geocoding (city search) request.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The configured search URL could not be turned into a request URL.
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Network failure or non-success HTTP status.
    #[error("search request failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The response body was not a JSON array of search results.
    #[error("search response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures of the geometry (polygon) request.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The configured geometry URL could not be turned into a request URL.
    #[error("invalid geometry endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Network failure; HTTP error statuses are not failures here.
    #[error("geometry request failed: {0}")]
    Transport(#[source] ReqwestError),
}

/// Failures while persisting a geometry payload.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output directory did not exist and could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Terminal failure of a single city's processing.
///
/// Each variant corresponds to the stage that failed. None of them abort the
/// batch; the driver logs the error, counts it and moves on.
#[derive(Error, Debug)]
pub enum CityError {
    /// The search returned no result classified as a city.
    #[error("no city found")]
    NotFound,

    /// A city result was found but carried no OSM identifier.
    #[error("city result has no OSM identifier")]
    MissingIdentifier,

    /// The geocoding request failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The geometry request failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The payload could not be written to disk.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl CityError {
    /// Maps the failure onto the counted error category.
    pub fn error_type(&self) -> ErrorType {
        match self {
            CityError::NotFound => ErrorType::GeocodeNotFound,
            CityError::MissingIdentifier => ErrorType::GeocodeMissingIdentifier,
            CityError::Geocode(GeocodeError::Malformed(_)) => ErrorType::GeocodeMalformedResponse,
            CityError::Geocode(_) => ErrorType::GeocodeTransportError,
            CityError::Geometry(_) => ErrorType::GeometryTransportError,
            CityError::Write(_) => ErrorType::WriteFailure,
        }
    }
}

/// Types of errors that can occur during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Input list missing or unreadable
    InputUnavailable,
    /// No search result classified as a city
    GeocodeNotFound,
    /// City result without an OSM id
    GeocodeMissingIdentifier,
    /// Search request failed on the network or with an error status
    GeocodeTransportError,
    /// Search response was not valid JSON
    GeocodeMalformedResponse,
    /// Geometry request failed on the network
    GeometryTransportError,
    /// Output directory or file could not be written
    WriteFailure,
}

/// Informational events that are not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// The output directory was created by this run.
    DirectoryCreated,
    /// Another actor created the output directory between the check and the create.
    DirectoryCreateRace,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InputUnavailable => "Input file unavailable",
            ErrorType::GeocodeNotFound => "No city in search results",
            ErrorType::GeocodeMissingIdentifier => "City result without OSM id",
            ErrorType::GeocodeTransportError => "Search request error",
            ErrorType::GeocodeMalformedResponse => "Malformed search response",
            ErrorType::GeometryTransportError => "Geometry request error",
            ErrorType::WriteFailure => "Output write failure",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DirectoryCreated => "Output directory created",
            InfoType::DirectoryCreateRace => "Output directory appeared concurrently",
        }
    }
}
