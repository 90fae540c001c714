//! whois_enrich library: WHOIS enrichment of IP-bearing CSV records
//!
//! Reads a CSV table with an `IPs` column, samples the first address of each
//! record, looks each one up against an IP-to-ASN WHOIS server and writes the
//! table back out with `sample_ip`, `whois_desc` and `whois_cidr` columns.
//!
//! # Example
//!
//! ```no_run
//! use whois_enrich::{run_enrichment, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("data/report.csv"),
//!     ..Default::default()
//! };
//!
//! let report = run_enrichment(config).await?;
//! println!("{} rows, {} lookups failed", report.total_rows, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are awaited one row at a time; a current-thread Tokio runtime is
//! all that is needed.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod enrich;
mod error_handling;
pub mod initialization;
pub mod sample;
pub mod table;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use enrich::{enrich_table, lookup_and_normalize, merge_outcomes, LookupOutcome};
pub use error_handling::{
    EnrichmentStats, InitializationError, LookupError, LookupFailureKind, SampleError, TableError,
};
pub use run::{run_enrichment, run_enrichment_with, EnrichReport};
pub use whois::{LookupResult, RegistryLookup, WhoisClient};

// Internal run module (load, sample, enrich, write)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use crate::config::Config;
    use crate::enrich::enrich_table;
    use crate::error_handling::EnrichmentStats;
    use crate::sample::sample_first_address;
    use crate::table::{derive_output_path, read_table, write_table};
    use crate::whois::{RegistryLookup, WhoisClient};

    /// Results of an enrichment run.
    #[derive(Debug, Clone)]
    pub struct EnrichReport {
        /// Rows read and written
        pub total_rows: usize,
        /// Rows whose lookup succeeded
        pub successful: usize,
        /// Rows whose lookup failed (`whois_cidr` is the sentinel)
        pub failed: usize,
        /// Where the enriched table was written
        pub output_path: PathBuf,
        /// Wall-clock duration of the run
        pub elapsed_seconds: f64,
        /// Per-kind lookup statistics
        pub stats: EnrichmentStats,
    }

    /// Runs the enrichment with a [`WhoisClient`] built from `config`.
    pub async fn run_enrichment(config: Config) -> Result<EnrichReport> {
        let client = WhoisClient::new(
            config.whois_server.clone(),
            Duration::from_secs(config.timeout_seconds),
        );
        run_enrichment_with(&config, &client).await
    }

    /// Runs the enrichment with any [`RegistryLookup`] implementation.
    ///
    /// Load, sample, look up and write are strictly sequential; the output
    /// path is derived before any lookup so a bad path fails fast.
    pub async fn run_enrichment_with<L: RegistryLookup>(
        config: &Config,
        client: &L,
    ) -> Result<EnrichReport> {
        let start_time = Instant::now();

        let output_path = match &config.output {
            Some(path) => path.clone(),
            None => derive_output_path(&config.file)?,
        };

        let mut table = read_table(&config.file)
            .with_context(|| format!("Failed to read {}", config.file.display()))?;
        info!(
            "Loaded {} rows from {}",
            table.row_count(),
            config.file.display()
        );

        sample_first_address(&mut table).context("Failed to sample addresses")?;

        let mut stats = EnrichmentStats::new();
        enrich_table(&mut table, client, &mut stats)
            .await
            .context("Failed to merge WHOIS results")?;
        stats.log_summary();

        write_table(&table, &output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Results written to {}", output_path.display());

        Ok(EnrichReport {
            total_rows: table.row_count(),
            successful: stats.successes(),
            failed: stats.total_failures(),
            output_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            stats,
        })
    }
}
