//! Error handling for pool address derivation
//!
//! Every fallible operation in the crate returns [`PoolAddressError`].
//! All failures are synchronous and non-retryable: they indicate malformed
//! input or a caller programming error, never a transient condition.

use std::fmt;

/// Result type alias for pool address operations
pub type Result<T> = std::result::Result<T, PoolAddressError>;

/// Error kinds for address parsing, validation and registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolAddressError {
    /// Binary input not exactly 20 bytes, or heximal input not exactly
    /// 40 valid hex digits after optional prefix stripping
    InvalidAddress(String),
    /// Binary input not exactly 32 bytes, or heximal input not exactly
    /// 64 valid hex digits after optional prefix stripping
    InvalidHash(String),
    /// A token address is the all-zero address
    ZeroAddress,
    /// The two token addresses are byte-identical
    IdenticalAddress,
    /// Exchange identifier outside the closed registry set
    UnknownExchange(String),
}

impl fmt::Display for PoolAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolAddressError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            PoolAddressError::InvalidHash(msg) => write!(f, "Invalid hash: {msg}"),
            PoolAddressError::ZeroAddress => write!(f, "Not accepted zero addresses"),
            PoolAddressError::IdenticalAddress => write!(f, "Not identical addresses"),
            PoolAddressError::UnknownExchange(name) => write!(f, "Unknown exchange: {name}"),
        }
    }
}

impl std::error::Error for PoolAddressError {}
