//! Special-purpose address blocks.
//!
//! Addresses in these blocks have no registry entry, so they are rejected
//! before any network traffic.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error_handling::LookupError;

struct ReservedBlock<T> {
    network: T,
    prefix_len: u32,
    name: &'static str,
    rfc: &'static str,
}

// Order matters: more specific blocks come before the blocks containing them.
const IPV4_RESERVED: &[ReservedBlock<u32>] = &[
    block_v4([0, 0, 0, 0], 8, "This Network", "RFC 1122, Section 3.2.1.3"),
    block_v4([10, 0, 0, 0], 8, "Private-Use Networks", "RFC 1918"),
    block_v4([100, 64, 0, 0], 10, "Shared Address Space", "RFC 6598"),
    block_v4([127, 0, 0, 0], 8, "Loopback", "RFC 1122, Section 3.2.1.3"),
    block_v4([169, 254, 0, 0], 16, "Link Local", "RFC 3927"),
    block_v4([172, 16, 0, 0], 12, "Private-Use Networks", "RFC 1918"),
    block_v4([192, 0, 0, 0], 24, "IETF Protocol Assignments", "RFC 5736"),
    block_v4([192, 0, 2, 0], 24, "TEST-NET-1", "RFC 5737"),
    block_v4([192, 88, 99, 0], 24, "6to4 Relay Anycast", "RFC 3068"),
    block_v4([192, 168, 0, 0], 16, "Private-Use Networks", "RFC 1918"),
    block_v4([198, 18, 0, 0], 15, "Network Interconnect Device Benchmark Testing", "RFC 2544"),
    block_v4([198, 51, 100, 0], 24, "TEST-NET-2", "RFC 5737"),
    block_v4([203, 0, 113, 0], 24, "TEST-NET-3", "RFC 5737"),
    block_v4([224, 0, 0, 0], 4, "Multicast", "RFC 3171"),
    block_v4([255, 255, 255, 255], 32, "Limited Broadcast", "RFC 919, Section 7"),
    block_v4([240, 0, 0, 0], 4, "Reserved for Future Use", "RFC 1112, Section 4"),
];

const IPV6_RESERVED: &[ReservedBlock<u128>] = &[
    block_v6([0, 0, 0, 0, 0, 0, 0, 0], 128, "Unspecified", "RFC 4291, Section 2.5.2"),
    block_v6([0, 0, 0, 0, 0, 0, 0, 1], 128, "Loopback", "RFC 4291, Section 2.5.3"),
    block_v6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0], 32, "Documentation", "RFC 3849"),
    block_v6([0xfc00, 0, 0, 0, 0, 0, 0, 0], 7, "Unique Local Unicast", "RFC 4193"),
    block_v6([0xfe80, 0, 0, 0, 0, 0, 0, 0], 10, "Link-Local", "RFC 4291, Section 2.5.6"),
    block_v6([0xff00, 0, 0, 0, 0, 0, 0, 0], 8, "Multicast", "RFC 4291, Section 2.7"),
];

const fn block_v4(
    octets: [u8; 4],
    prefix_len: u32,
    name: &'static str,
    rfc: &'static str,
) -> ReservedBlock<u32> {
    ReservedBlock {
        network: u32::from_be_bytes(octets),
        prefix_len,
        name,
        rfc,
    }
}

const fn block_v6(
    segments: [u16; 8],
    prefix_len: u32,
    name: &'static str,
    rfc: &'static str,
) -> ReservedBlock<u128> {
    let mut bits: u128 = 0;
    let mut i = 0;
    while i < 8 {
        bits = (bits << 16) | segments[i] as u128;
        i += 1;
    }
    ReservedBlock {
        network: bits,
        prefix_len,
        name,
        rfc,
    }
}

fn mask_v4(prefix_len: u32) -> u32 {
    u32::MAX.checked_shl(32 - prefix_len).unwrap_or(0)
}

fn mask_v6(prefix_len: u32) -> u128 {
    u128::MAX.checked_shl(128 - prefix_len).unwrap_or(0)
}

fn find_v4(addr: Ipv4Addr) -> Option<&'static ReservedBlock<u32>> {
    let bits = u32::from(addr);
    IPV4_RESERVED
        .iter()
        .find(|b| bits & mask_v4(b.prefix_len) == b.network)
}

fn find_v6(addr: Ipv6Addr) -> Option<&'static ReservedBlock<u128>> {
    let bits = u128::from(addr);
    IPV6_RESERVED
        .iter()
        .find(|b| bits & mask_v6(b.prefix_len) == b.network)
}

/// Parses `address` and rejects special-purpose addresses.
///
/// # Errors
///
/// `LookupError::InvalidAddress` if the text is not an IP address,
/// `LookupError::ReservedAddress` if it lies in a special-purpose block.
pub(crate) fn check_address(address: &str) -> Result<IpAddr, LookupError> {
    let ip: IpAddr = address
        .trim()
        .parse()
        .map_err(|_| LookupError::InvalidAddress(address.to_string()))?;

    let reserved = match ip {
        IpAddr::V4(v4) => find_v4(v4).map(|b| ("IPv4", b.name, b.rfc)),
        IpAddr::V6(v6) => find_v6(v6).map(|b| ("IPv6", b.name, b.rfc)),
    };

    match reserved {
        Some((family, name, rfc)) => Err(LookupError::ReservedAddress {
            family,
            address: address.to_string(),
            name,
            rfc,
        }),
        None => Ok(ip),
    }
}
