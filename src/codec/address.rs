use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::strip_heximal_prefix;
use crate::error::{PoolAddressError, Result};
use crate::utils::keccak256_digest;

/// Canonical address width in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account or contract address.
///
/// The only structural invariant is the length, enforced by construction.
/// The all-zero address is representable; the derivation algorithm rejects
/// it, not the type. Ordering is unsigned lexicographic over the bytes,
/// which is the canonical pair ordering used by pool derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Creates an address from a fixed-size byte array.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the all-zero address.
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    /// Creates an address from a byte slice of exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            PoolAddressError::InvalidAddress(format!(
                "expected {ADDRESS_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Parses a heximal address string.
    ///
    /// Accepts an optional `0x`/`0X` prefix and any letter casing. The
    /// remainder must be exactly 40 hex digits; anything else, including
    /// the empty string and odd-length input, is an `InvalidAddress`.
    pub fn from_heximal(input: &str) -> Result<Self> {
        let digits = strip_heximal_prefix(input);
        if digits.len() != 2 * ADDRESS_LEN {
            return Err(PoolAddressError::InvalidAddress(format!(
                "expected {} hex digits, got {}",
                2 * ADDRESS_LEN,
                digits.len()
            )));
        }
        let bytes = hex::decode(digits)
            .map_err(|e| PoolAddressError::InvalidAddress(format!("invalid hex digits: {e}")))?;
        Self::from_slice(&bytes)
    }

    /// Borrows the underlying 20 bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// True for the all-zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    /// Encodes the address as a `0x`-prefixed EIP-55 checksum string.
    ///
    /// The casing of each hex letter follows the keccak digest of the
    /// lowercase hex form: letter at position `i` is uppercased when the
    /// i-th nibble of the digest (high nibble first) is 8 or more.
    pub fn to_checksum_heximal(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256_digest(lower.as_bytes());
        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, ch) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum_heximal())
    }
}

impl FromStr for Address {
    type Err = PoolAddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_heximal(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum_heximal())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Address::from_heximal(&value).map_err(D::Error::custom)
    }
}
