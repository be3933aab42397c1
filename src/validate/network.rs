//! IP address validation
//!
//! Accepts only addresses usable as public endpoints: the string must
//! parse, and the address must sit outside the private and reserved
//! ranges.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Validate an IP address of either family.
pub fn is_valid_ip(ip: &str) -> bool {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => is_public_v4(&addr),
        Ok(IpAddr::V6(addr)) => is_public_v6(&addr),
        Err(_) => false,
    }
}

/// Validate an IPv4 address.
pub fn is_valid_ipv4(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>()
        .map(|addr| is_public_v4(&addr))
        .unwrap_or(false)
}

/// Validate an IPv6 address.
pub fn is_valid_ipv6(ip: &str) -> bool {
    ip.parse::<Ipv6Addr>()
        .map(|addr| is_public_v6(&addr))
        .unwrap_or(false)
}

fn is_public_v4(addr: &Ipv4Addr) -> bool {
    !(addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_broadcast()
        || addr.is_documentation()
        || addr.is_unspecified()
        // 240.0.0.0/4 is reserved for future use
        || addr.octets()[0] >= 240)
}

fn is_public_v6(addr: &Ipv6Addr) -> bool {
    let first = addr.segments()[0];
    !(addr.is_loopback()
        || addr.is_unspecified()
        // fc00::/7 unique local
        || (first & 0xfe00) == 0xfc00
        // fe80::/10 link local
        || (first & 0xffc0) == 0xfe80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_addresses_accepted() {
        assert!(is_valid_ipv4("8.8.8.8"));
        assert!(is_valid_ipv4("93.184.216.34"));
        assert!(is_valid_ipv6("2001:4860:4860::8888"));
        assert!(is_valid_ip("8.8.8.8"));
        assert!(is_valid_ip("2001:4860:4860::8888"));
    }

    #[test]
    fn test_private_ranges_rejected() {
        assert!(!is_valid_ipv4("10.0.0.1"));
        assert!(!is_valid_ipv4("172.16.4.2"));
        assert!(!is_valid_ipv4("192.168.1.1"));
        assert!(!is_valid_ipv6("fc00::1"));
        assert!(!is_valid_ipv6("fe80::1"));
    }

    #[test]
    fn test_reserved_ranges_rejected() {
        assert!(!is_valid_ipv4("127.0.0.1"));
        assert!(!is_valid_ipv4("169.254.10.1"));
        assert!(!is_valid_ipv4("255.255.255.255"));
        assert!(!is_valid_ipv4("240.0.0.1"));
        assert!(!is_valid_ipv4("0.0.0.0"));
        assert!(!is_valid_ipv6("::1"));
        assert!(!is_valid_ipv6("::"));
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(!is_valid_ip("not-an-ip"));
        assert!(!is_valid_ip("256.1.1.1"));
        assert!(!is_valid_ip(""));
        // Family-specific checks reject the other family
        assert!(!is_valid_ipv4("2001:4860:4860::8888"));
        assert!(!is_valid_ipv6("8.8.8.8"));
    }
}
