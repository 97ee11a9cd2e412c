//! Progress logging utilities.

use log::info;

/// Logs the line announcing a city before any request is made for it.
pub fn log_city_start(index: usize, total: usize, city: &str) {
    info!("Fetching data for {} ({}/{})", city, index + 1, total);
}

/// Logs overall progress information.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `processed` - Number of cities that reached a terminal state
/// * `written` - Number of cities whose file was written
pub fn log_progress(start_time: std::time::Instant, processed: usize, written: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} cities ({} written) in {:.2} seconds (~{:.2} cities/sec)",
        processed, written, elapsed_secs, rate
    );
}
