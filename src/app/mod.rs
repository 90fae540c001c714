//! Run-time helpers used by the enrichment loop.

pub mod logging;

// Re-export public API
pub use logging::log_progress;
