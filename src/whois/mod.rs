// whois/mod.rs
// IP-to-ASN WHOIS lookup over TCP port 43

//! Registry lookup client.
//!
//! [`WhoisClient`] speaks the Team Cymru IP-to-ASN WHOIS dialect: one query
//! line per connection, one pipe-separated answer line, connection closed by
//! the server. The enrichment pipeline only sees the [`RegistryLookup`] trait
//! so tests can substitute a deterministic client.

mod parse;
mod reserved;
mod types;

use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::{DEFAULT_WHOIS_SERVER, WHOIS_TIMEOUT_SECS};
use crate::error_handling::LookupError;

pub use types::LookupResult;

/// Upper bound on a WHOIS answer; a single ASN line is well under 1KB.
const MAX_RESPONSE_BYTES: u64 = 64 * 1024;

/// A service that resolves one address to its registry metadata.
pub trait RegistryLookup {
    /// Looks up `address`, returning the ASN description and CIDR among others.
    fn lookup(&self, address: &str) -> impl Future<Output = Result<LookupResult, LookupError>>;
}

/// WHOIS client for IP-to-ASN servers.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    server: String,
    timeout: Duration,
}

impl WhoisClient {
    /// Creates a client for `server` (`host:port`).
    ///
    /// `timeout` bounds the whole exchange: connect, query and read.
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            timeout,
        }
    }

    /// Server this client queries.
    pub fn server(&self) -> &str {
        &self.server
    }

    async fn query(&self, ip: IpAddr) -> Result<String, LookupError> {
        let mut stream = TcpStream::connect(&self.server)
            .await
            .map_err(LookupError::Connect)?;

        // Ask for registry, allocation date, country and prefix columns
        stream
            .write_all(format!(" -r -a -c -p -f {ip}\r\n").as_bytes())
            .await?;

        let mut buf = Vec::new();
        stream.take(MAX_RESPONSE_BYTES).read_to_end(&mut buf).await?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_WHOIS_SERVER,
            Duration::from_secs(WHOIS_TIMEOUT_SECS),
        )
    }
}

impl RegistryLookup for WhoisClient {
    /// Performs a WHOIS lookup for an IP address.
    ///
    /// The address is validated first: text that is not an IP, and
    /// special-purpose addresses (private, loopback, documentation, ...), fail
    /// without touching the network.
    async fn lookup(&self, address: &str) -> Result<LookupResult, LookupError> {
        let ip = reserved::check_address(address)?;

        log::debug!("Querying {} for {}", self.server, ip);

        let response = tokio::time::timeout(self.timeout, self.query(ip))
            .await
            .map_err(|_| LookupError::Timeout(self.timeout))??;

        parse::parse_asn_response(&response)
    }
}
