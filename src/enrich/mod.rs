//! Per-record WHOIS enrichment.
//!
//! Every sampled address goes through exactly one lookup and ends in exactly
//! one [`LookupOutcome`]. Failures never escape this module: they become a
//! `Failure` outcome and the run moves on to the next row.
//!
//! In the output table both outcomes are flattened into the `whois_desc` and
//! `whois_cidr` columns:
//!
//! | outcome                        | `whois_desc`                  | `whois_cidr`   |
//! |--------------------------------|-------------------------------|----------------|
//! | `Success { description, cidr }`| description without commas    | cidr           |
//! | `Failure { reason }`           | reason                        | `0.0.0.0`      |

use std::time::Instant;

use crate::app::log_progress;
use crate::config::{
    LOGGING_INTERVAL, SAMPLE_IP_COLUMN, SENTINEL_CIDR, WHOIS_CIDR_COLUMN, WHOIS_DESC_COLUMN,
};
use crate::error_handling::{EnrichmentStats, TableError};
use crate::table::Table;
use crate::whois::RegistryLookup;

/// Result of looking up one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The registry answered.
    Success {
        /// Organization description, commas already stripped
        description: String,
        /// Network block as reported
        cidr: String,
    },
    /// The lookup failed; `reason` is the error's text.
    Failure {
        /// Error text
        reason: String,
    },
}

impl LookupOutcome {
    /// Returns true for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success { .. })
    }

    /// Collapses the outcome into the `(whois_desc, whois_cidr)` column pair.
    pub fn into_columns(self) -> (String, String) {
        match self {
            LookupOutcome::Success { description, cidr } => (description, cidr),
            LookupOutcome::Failure { reason } => (reason, SENTINEL_CIDR.to_string()),
        }
    }
}

/// Removes every comma from a registry description.
pub fn sanitize_description(description: &str) -> String {
    description.replace(',', "")
}

/// Looks up one address and normalizes the answer.
///
/// Never fails: lookup errors are returned as `LookupOutcome::Failure`.
pub async fn lookup_address<L: RegistryLookup>(
    client: &L,
    address: &str,
    stats: &mut EnrichmentStats,
) -> LookupOutcome {
    log::info!("Getting IP info for {}", address);

    match client.lookup(address).await {
        Ok(result) => {
            let description = sanitize_description(&result.asn_description);
            log::info!("{} {}", description, result.asn_cidr);
            stats.record_success();
            LookupOutcome::Success {
                description,
                cidr: result.asn_cidr,
            }
        }
        Err(e) => {
            log::warn!("WHOIS lookup failed for {}: {}", address, e);
            stats.record_failure(e.kind());
            LookupOutcome::Failure {
                reason: e.to_string(),
            }
        }
    }
}

/// Looks up one address and returns its `(description, cidr)` column pair.
///
/// On failure the pair is `(error text, "0.0.0.0")`.
pub async fn lookup_and_normalize<L: RegistryLookup>(client: &L, address: &str) -> (String, String) {
    let mut stats = EnrichmentStats::new();
    lookup_address(client, address, &mut stats)
        .await
        .into_columns()
}

/// Writes lookup outcomes into the `whois_desc` and `whois_cidr` columns.
///
/// Alignment is positional: outcome *i* belongs to row *i*. A count that
/// differs from the table's row count is an error and nothing is written.
pub fn merge_outcomes(table: &mut Table, outcomes: Vec<LookupOutcome>) -> Result<(), TableError> {
    if outcomes.len() != table.row_count() {
        return Err(TableError::RowCountMismatch {
            column: WHOIS_DESC_COLUMN.to_string(),
            expected: table.row_count(),
            actual: outcomes.len(),
        });
    }

    let (descriptions, cidrs): (Vec<String>, Vec<String>) =
        outcomes.into_iter().map(LookupOutcome::into_columns).unzip();

    table.set_column(WHOIS_DESC_COLUMN, descriptions)?;
    table.set_column(WHOIS_CIDR_COLUMN, cidrs)?;
    Ok(())
}

/// Looks up every row's `sample_ip`, one at a time and in row order, then
/// merges the results into the table.
///
/// # Errors
///
/// Only table errors (missing `sample_ip` column, merge mismatch) are
/// returned; lookup failures are recorded per row.
pub async fn enrich_table<L: RegistryLookup>(
    table: &mut Table,
    client: &L,
    stats: &mut EnrichmentStats,
) -> Result<(), TableError> {
    let addresses: Vec<String> = table
        .column(SAMPLE_IP_COLUMN)
        .ok_or_else(|| TableError::MissingColumn(SAMPLE_IP_COLUMN.to_string()))?
        .map(str::to_string)
        .collect();

    let total = addresses.len();
    let start_time = Instant::now();
    let mut outcomes = Vec::with_capacity(total);

    for (idx, address) in addresses.iter().enumerate() {
        outcomes.push(lookup_address(client, address, stats).await);

        let completed = idx + 1;
        if completed % LOGGING_INTERVAL == 0 && completed < total {
            log_progress(start_time, completed, total);
        }
    }
    log_progress(start_time, total, total);

    merge_outcomes(table, outcomes)
}
