//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors reading, widening or writing the table. All are fatal.
#[derive(Error, Debug)]
pub enum TableError {
    /// The input file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("Failed to create {path}: {source}")]
    Create {
        /// Path that failed to be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed CSV or a failed CSV write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A column's values do not line up with the table's rows.
    #[error("Column '{column}' has {actual} values but the table has {expected} rows")]
    RowCountMismatch {
        /// Column being written
        column: String,
        /// Number of rows in the table
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A column the stage depends on is absent.
    #[error("Table has no '{0}' column")]
    MissingColumn(String),

    /// A row has a different number of cells than the header.
    #[error("Row {row} has {actual} cells but the header has {expected}")]
    RaggedRow {
        /// 1-based data row
        row: usize,
        /// Header width
        expected: usize,
        /// Cells in the row
        actual: usize,
    },

    /// No output file name can be derived from the input path.
    #[error("Cannot derive an output path from {0}")]
    OutputPath(PathBuf),
}

/// Errors sampling an address from the `IPs` column. All are fatal.
#[derive(Error, Debug)]
pub enum SampleError {
    /// The table has no column with the expected name.
    #[error("Input table has no '{0}' column")]
    MissingColumn(String),

    /// The cell is not a list of quoted strings.
    #[error("Malformed address list in row {row}: {reason}")]
    Malformed {
        /// 1-based data row
        row: usize,
        /// What the parser rejected
        reason: String,
    },

    /// The cell decodes to an empty list.
    #[error("Empty address list in row {row}")]
    Empty {
        /// 1-based data row
        row: usize,
    },

    /// Writing the sampled column failed.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Per-row lookup failures.
///
/// These never abort the run: the pipeline turns each one into a fallback
/// pair whose description is this error's `Display` text.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The sampled value is not an IP address.
    #[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
    InvalidAddress(String),

    /// The address belongs to a special-purpose block with no registry entry.
    #[error("{family} address {address} is already defined as {name} via {rfc}.")]
    ReservedAddress {
        /// "IPv4" or "IPv6"
        family: &'static str,
        /// Address as given
        address: String,
        /// Block name
        name: &'static str,
        /// Defining RFC
        rfc: &'static str,
    },

    /// Could not reach the WHOIS server.
    #[error("{0}")]
    Connect(std::io::Error),

    /// The exchange did not finish within the client timeout.
    #[error("WHOIS lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The connection failed mid-exchange.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The response names a registry this client does not know.
    #[error("ASN registry {0} is not known.")]
    UnknownRegistry(String),

    /// The response lacks a field the enrichment needs.
    #[error("WHOIS response has no {0}")]
    MissingField(&'static str),

    /// The response could not be parsed at all.
    #[error("Malformed WHOIS response: {0}")]
    MalformedResponse(String),
}

/// Classification of a [`LookupError`] for statistics.
///
/// `InvalidAddress`, `ReservedAddress` and `UnknownRegistry` are expected data
/// conditions, the rest are transport or response faults. Both groups are
/// recovered the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, strum_macros::Display)]
pub enum LookupFailureKind {
    /// Not an IP address
    InvalidAddress,
    /// Special-purpose address block
    ReservedAddress,
    /// Connection could not be established
    Connect,
    /// Timed out
    Timeout,
    /// I/O error mid-exchange
    Io,
    /// Unknown registry in response
    UnknownRegistry,
    /// Field missing from response
    MissingField,
    /// Unparseable response
    MalformedResponse,
}

impl LookupError {
    /// Returns the failure classification used for statistics.
    pub fn kind(&self) -> LookupFailureKind {
        match self {
            LookupError::InvalidAddress(_) => LookupFailureKind::InvalidAddress,
            LookupError::ReservedAddress { .. } => LookupFailureKind::ReservedAddress,
            LookupError::Connect(_) => LookupFailureKind::Connect,
            LookupError::Timeout(_) => LookupFailureKind::Timeout,
            LookupError::Io(_) => LookupFailureKind::Io,
            LookupError::UnknownRegistry(_) => LookupFailureKind::UnknownRegistry,
            LookupError::MissingField(_) => LookupFailureKind::MissingField,
            LookupError::MalformedResponse(_) => LookupFailureKind::MalformedResponse,
        }
    }
}
