//! Configuration constants.
//!
//! Column names, the failure sentinel and network defaults used across the
//! enrichment run.

// Input/output columns
/// Column holding the serialized list of addresses for a record.
pub const IPS_COLUMN: &str = "IPs";
/// Column populated with the first address of `IPs`.
pub const SAMPLE_IP_COLUMN: &str = "sample_ip";
/// Column populated with the WHOIS ASN description (or the lookup error text).
pub const WHOIS_DESC_COLUMN: &str = "whois_desc";
/// Column populated with the WHOIS ASN CIDR (or [`SENTINEL_CIDR`]).
pub const WHOIS_CIDR_COLUMN: &str = "whois_cidr";

/// CIDR written for a row whose lookup failed.
///
/// This is the only failure marker in the output table: a row is a failure
/// if and only if its `whois_cidr` equals this value.
pub const SENTINEL_CIDR: &str = "0.0.0.0";

/// Suffix appended to the input file stem to form the output file name.
pub const RESULTS_SUFFIX: &str = "_results";
/// Extension of the output file.
pub const RESULTS_EXTENSION: &str = "csv";

// WHOIS
/// Default IP-to-ASN WHOIS server (Team Cymru).
pub const DEFAULT_WHOIS_SERVER: &str = "whois.cymru.com:43";
/// WHOIS exchange timeout in seconds (connect, query and read).
pub const WHOIS_TIMEOUT_SECS: u64 = 5;

/// Log a progress line every N rows.
pub const LOGGING_INTERVAL: usize = 5;
