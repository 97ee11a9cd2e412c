//! City list loading.
//!
//! The input is a UTF-8 text file with one city name per line. Lines are kept
//! verbatim and in file order: no trimming, no comment or blank-line skipping,
//! no deduplication. A trailing newline at the end of the file does not add an
//! empty entry; `\r\n` line endings are handled like `\n`.

use std::path::Path;

use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::{ErrorType, ProcessingStats};

/// Reads every line of `path` into memory.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be opened or a line cannot be read
/// (including invalid UTF-8).
pub async fn read_cities(path: &Path) -> std::io::Result<Vec<String>> {
    let file = tokio::fs::File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut cities = Vec::new();
    while let Some(line) = lines.next_line().await? {
        cities.push(line);
    }
    Ok(cities)
}

/// Loads the city list, treating an unreadable file as an empty list.
///
/// A read failure is logged and counted as `ErrorType::InputUnavailable`; the
/// run then completes with nothing to process instead of aborting.
pub async fn load_cities(path: &Path, stats: &ProcessingStats) -> Vec<String> {
    match read_cities(path).await {
        Ok(cities) => {
            info!("Loaded {} cities from {}", cities.len(), path.display());
            cities
        }
        Err(e) => {
            error!("Failed to read city list {}: {}", path.display(), e);
            stats.increment_error(ErrorType::InputUnavailable);
            Vec::new()
        }
    }
}
