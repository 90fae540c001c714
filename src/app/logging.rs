//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress information about row enrichment.
///
/// # Arguments
///
/// * `start_time` - The start time of the enrichment loop
/// * `completed` - Rows looked up so far
/// * `total` - Rows in the table
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Looked up {}/{} rows in {:.2} seconds (~{:.2} rows/sec)",
        completed, total, elapsed_secs, rate
    );
}
