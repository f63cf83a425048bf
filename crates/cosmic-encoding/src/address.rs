//! 20-byte hex address validation and normalization.
//!
//! Accepted form: `0x` followed by exactly 40 hex digits in either case.
//! No checksum (EIP-55 mixed case) is checked; normalization only lowercases
//! the digits.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConvertError;

/// Fixed address prefix.
pub const ADDRESS_PREFIX: &str = "0x";

/// Hex digits after the prefix (20 bytes).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Raw address width in bytes.
pub const ADDRESS_BYTES: usize = ADDRESS_HEX_LEN / 2;

/// Whether `addr` is `0x` + 40 hex digits.
pub fn is_valid_address(addr: &str) -> bool {
    match addr.strip_prefix(ADDRESS_PREFIX) {
        Some(hex_part) => {
            hex_part.len() == ADDRESS_HEX_LEN && hex_part.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Lowercase the hex digits of a valid address.
pub fn normalize_address(addr: &str) -> Result<String, ConvertError> {
    if !is_valid_address(addr) {
        return Err(ConvertError::InvalidAddressFormat(addr.to_string()));
    }
    let hex_part = &addr[ADDRESS_PREFIX.len()..];
    Ok(format!("{}{}", ADDRESS_PREFIX, hex_part.to_ascii_lowercase()))
}

/// A validated, normalized address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    normalized: String,
    bytes: [u8; ADDRESS_BYTES],
}

impl Address {
    pub fn parse(addr: &str) -> Result<Self, ConvertError> {
        let normalized = normalize_address(addr)?;
        let mut bytes = [0u8; ADDRESS_BYTES];
        hex::decode_to_slice(&normalized[ADDRESS_PREFIX.len()..], &mut bytes)
            .map_err(|_| ConvertError::InvalidAddressFormat(addr.to_string()))?;
        Ok(Self { normalized, bytes })
    }

    /// Build from raw bytes.
    pub fn from_bytes(bytes: &[u8; ADDRESS_BYTES]) -> Self {
        Self {
            normalized: format!("{}{}", ADDRESS_PREFIX, hex::encode(bytes)),
            bytes: *bytes,
        }
    }

    /// Normalized form, prefix included.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The 40 lowercase hex digits.
    pub fn hex_part(&self) -> &str {
        &self.normalized[ADDRESS_PREFIX.len()..]
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        self.bytes
    }

    pub fn into_string(self) -> String {
        self.normalized
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for Address {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.normalized)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

// ============================================================================
// TESTS
// ============================================================================
