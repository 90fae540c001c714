//! WHOIS data structures.

/// IP-to-ASN WHOIS lookup result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    /// Origin AS number (e.g., "15169"), or "NA" when unannounced
    pub asn: String,
    /// BGP prefix covering the address (e.g., "8.8.8.0/24")
    pub asn_cidr: String,
    /// Registry country code, upper-cased
    pub asn_country_code: String,
    /// Regional internet registry (arin, ripencc, apnic, lacnic, afrinic)
    pub asn_registry: String,
    /// Allocation date as reported by the registry
    pub asn_date: String,
    /// AS name / organization description (e.g., "GOOGLE, US")
    pub asn_description: String,
}
