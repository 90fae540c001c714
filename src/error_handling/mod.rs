//! Error handling and enrichment statistics.
//!
//! This module provides:
//! - Error type definitions for every stage of the run
//! - Classification of per-row lookup failures
//! - Enrichment statistics tracking
//!
//! Only [`LookupError`] is recovered (per row); every other error aborts the run.

mod stats;
mod types;

// Re-export public API
pub use stats::EnrichmentStats;
pub use types::{InitializationError, LookupError, LookupFailureKind, SampleError, TableError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enrichment_stats_initialization() {
        let stats = EnrichmentStats::new();
        assert_eq!(stats.successes(), 0);
        for kind in LookupFailureKind::iter() {
            assert_eq!(stats.get_failure_count(kind), 0);
        }
        assert_eq!(stats.total_failures(), 0);
    }

    #[test]
    fn test_enrichment_stats_increment() {
        let mut stats = EnrichmentStats::new();
        stats.record_success();
        stats.record_failure(LookupFailureKind::Timeout);
        stats.record_failure(LookupFailureKind::Timeout);
        stats.record_failure(LookupFailureKind::ReservedAddress);

        assert_eq!(stats.successes(), 1);
        assert_eq!(stats.get_failure_count(LookupFailureKind::Timeout), 2);
        assert_eq!(stats.get_failure_count(LookupFailureKind::ReservedAddress), 1);
        assert_eq!(stats.total_failures(), 3);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_lookup_error_kinds() {
        let timeout = LookupError::Timeout(std::time::Duration::from_secs(5));
        assert_eq!(timeout.kind(), LookupFailureKind::Timeout);
        assert_eq!(timeout.to_string(), "WHOIS lookup timed out after 5s");

        let refused = LookupError::Connect(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(refused.kind(), LookupFailureKind::Connect);
        assert_eq!(refused.to_string(), "connection refused");

        let missing = LookupError::MissingField("asn_cidr");
        assert_eq!(missing.kind(), LookupFailureKind::MissingField);
    }

    #[test]
    fn test_sample_error_mentions_row() {
        let err = SampleError::Empty { row: 3 };
        assert!(err.to_string().contains("row 3"));
    }
}
