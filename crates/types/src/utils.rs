//! Address helpers shared across the deployment tooling

use alloy::primitives::Address;

/// The canonical zero address
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Parse an account address.
///
/// Accepts the `0x`-prefixed 40-hex-digit form. All-lowercase and
/// all-uppercase inputs are accepted as-is; mixed-case inputs must carry a
/// valid EIP-55 checksum.
pub fn parse_address(address: &str) -> Option<Address> {
    let hex = address.strip_prefix("0x")?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        Address::parse_checksummed(address, None).ok()
    } else {
        address.parse().ok()
    }
}

/// Validate account address format
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_some()
}

/// Number of entries in a raw space-separated list value.
///
/// An absent or empty value counts as zero entries.
pub fn list_len(raw: Option<&str>) -> usize {
    match raw {
        None => 0,
        Some(s) if s.is_empty() => 0,
        Some(s) => s.split(' ').count(),
    }
}
