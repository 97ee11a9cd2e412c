//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEOMETRY_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SEARCH_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by `clap`, with every option also readable from a
/// `CITY_BOUNDARIES_*` environment variable. Library callers can build it directly.
///
/// # Examples
///
/// ```bash
/// # Defaults: ./assets/cities.txt -> ./geoJSON/
/// city_boundaries
///
/// # Custom input and output
/// city_boundaries capitals.txt --output-dir ./boundaries
/// ```
///
/// ```no_run
/// use city_boundaries::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("capitals.txt"),
///     output_dir: PathBuf::from("./boundaries"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "city_boundaries",
    about = "Fetches administrative boundaries for a list of cities and saves them as GeoJSON."
)]
pub struct Config {
    /// File with one city name per line
    #[arg(value_parser, default_value = DEFAULT_INPUT_FILE, env = "CITY_BOUNDARIES_FILE")]
    pub file: PathBuf,

    /// Directory the GeoJSON files are written to (created if missing)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR, env = "CITY_BOUNDARIES_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Base URL of the Nominatim geocoding service
    #[arg(long, default_value = DEFAULT_SEARCH_URL, env = "CITY_BOUNDARIES_SEARCH_URL")]
    pub search_url: String,

    /// Base URL of the polygon (geometry) service
    #[arg(long, default_value = DEFAULT_GEOMETRY_URL, env = "CITY_BOUNDARIES_GEOMETRY_URL")]
    pub geometry_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "CITY_BOUNDARIES_USER_AGENT")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "CITY_BOUNDARIES_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            geometry_url: DEFAULT_GEOMETRY_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
