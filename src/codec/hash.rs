use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::strip_heximal_prefix;
use crate::error::{PoolAddressError, Result};

/// Digest width in bytes.
pub const HASH_LEN: usize = 32;

/// A 32-byte hash value.
///
/// Used for factory creation-code hashes and intermediate keccak digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash32([u8; HASH_LEN]);

impl Hash32 {
    /// Creates a hash from a fixed-size byte array.
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a byte slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; HASH_LEN] = bytes.try_into().map_err(|_| {
            PoolAddressError::InvalidHash(format!(
                "expected {HASH_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Parses a heximal hash string: optional `0x`/`0X` prefix, exactly
    /// 64 hex digits, any letter casing.
    pub fn from_heximal(input: &str) -> Result<Self> {
        let digits = strip_heximal_prefix(input);
        if digits.len() != 2 * HASH_LEN {
            return Err(PoolAddressError::InvalidHash(format!(
                "expected {} hex digits, got {}",
                2 * HASH_LEN,
                digits.len()
            )));
        }
        let bytes = hex::decode(digits)
            .map_err(|e| PoolAddressError::InvalidHash(format!("invalid hex digits: {e}")))?;
        Self::from_slice(&bytes)
    }

    /// Borrows the underlying 32 bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Encodes the hash as a `0x`-prefixed lowercase heximal string.
    pub fn to_heximal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for Hash32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_heximal())
    }
}

impl FromStr for Hash32 {
    type Err = PoolAddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_heximal(s)
    }
}

impl Serialize for Hash32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_heximal())
    }
}

impl<'de> Deserialize<'de> for Hash32 {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Hash32::from_heximal(&value).map_err(D::Error::custom)
    }
}
