//! IP-to-ASN WHOIS response parsing.
//!
//! The server answers with one pipe-separated line per query:
//!
//! ```text
//! AS      | IP               | BGP Prefix          | CC | Registry | Allocated  | AS Name
//! 15169   | 8.8.8.8          | 8.8.8.0/24          | US | arin     | 1992-12-01 | GOOGLE, US
//! ```
//!
//! The header line may or may not be present.

use super::types::LookupResult;
use crate::error_handling::LookupError;

/// Registries the ASN data can come from.
pub(crate) const KNOWN_REGISTRIES: &[&str] = &["arin", "ripencc", "apnic", "lacnic", "afrinic"];

const FIELD_COUNT: usize = 7;

fn is_preamble(line: &str) -> bool {
    line.starts_with("Bulk mode")
        || line.split('|').next().map(str::trim) == Some("AS")
}

/// Parses the first data line of a WHOIS response.
pub(crate) fn parse_asn_response(response: &str) -> Result<LookupResult, LookupError> {
    let line = response
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !is_preamble(l))
        .ok_or_else(|| LookupError::MalformedResponse("empty response".to_string()))?;

    if let Some(message) = line.strip_prefix("Error:") {
        return Err(LookupError::MalformedResponse(message.trim().to_string()));
    }

    // The AS name is last and may itself contain '|'
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, '|').map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return Err(LookupError::MalformedResponse(format!(
            "expected {} fields, got {}: {}",
            FIELD_COUNT,
            fields.len(),
            line
        )));
    }

    let registry = fields[4];
    if !KNOWN_REGISTRIES.contains(&registry) {
        return Err(LookupError::UnknownRegistry(registry.to_string()));
    }

    let asn_cidr = required(fields[2], "asn_cidr")?;
    let asn_description = required(fields[6], "asn_description")?;

    Ok(LookupResult {
        asn: fields[0].to_string(),
        asn_cidr,
        asn_country_code: fields[3].to_uppercase(),
        asn_registry: registry.to_string(),
        asn_date: fields[5].to_string(),
        asn_description,
    })
}

fn required(value: &str, field: &'static str) -> Result<String, LookupError> {
    if value.is_empty() {
        Err(LookupError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}
