//! Enrichment statistics tracking.
//!
//! Counts successful lookups and failed lookups by [`LookupFailureKind`].
//! The run is single-threaded, so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::LookupFailureKind;

/// Per-run lookup statistics.
///
/// All failure kinds are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct EnrichmentStats {
    successes: usize,
    failures: HashMap<LookupFailureKind, usize>,
}

impl EnrichmentStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupFailureKind::iter() {
            failures.insert(kind, 0);
        }

        EnrichmentStats {
            successes: 0,
            failures,
        }
    }

    /// Records a successful lookup.
    pub fn record_success(&mut self) {
        self.successes += 1;
    }

    /// Records a failed lookup of the given kind.
    pub fn record_failure(&mut self, kind: LookupFailureKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    /// Number of successful lookups.
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Get the count for a failure kind.
    pub fn get_failure_count(&self, kind: LookupFailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    /// Total failed lookups across all kinds.
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }

    /// Total lookups performed.
    pub fn total(&self) -> usize {
        self.successes + self.total_failures()
    }

    /// Logs the non-zero failure counters, in declaration order.
    pub fn log_summary(&self) {
        log::info!(
            "WHOIS lookups: {} succeeded, {} failed",
            self.successes,
            self.total_failures()
        );
        for kind in LookupFailureKind::iter() {
            let count = self.get_failure_count(kind);
            if count > 0 {
                log::info!("   {}: {}", kind, count);
            }
        }
    }
}

impl Default for EnrichmentStats {
    fn default() -> Self {
        Self::new()
    }
}
