//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `city_boundaries` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use city_boundaries::initialization::init_logger_with;
use city_boundaries::{run_fetch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, falling back to the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_fetch(config).await {
        Ok(report) => {
            println!(
                "Fetched {} of {} cit{} ({} failed) in {:.1}s",
                report.written,
                report.total_cities,
                if report.total_cities == 1 { "y" } else { "ies" },
                report.failed,
                report.elapsed_seconds
            );
            println!("GeoJSON files saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("city_boundaries error: {:#}", e);
            process::exit(1);
        }
    }
}
