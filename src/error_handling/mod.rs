//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for each pipeline stage
//! - Error categories counted during a run
//! - Transport error categorization for log output
//!
//! Error types are categorized into:
//! - **Errors**: Failures that leave a city without an output file
//! - **Info**: Notable events that are not failures (directory creation)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, transport_kind_of, TransportKind};
pub use stats::ProcessingStats;
pub use types::{
    CityError, ErrorType, GeocodeError, GeometryError, InfoType, InitializationError, WriteError,
};
