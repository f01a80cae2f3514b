//! # dex-pool-address
//!
//! Off-chain derivation of liquidity pool contract addresses for BSC
//! exchange factories, using the CREATE2 deterministic deployment formula.
//! No network access: callers supply two token addresses and a factory
//! identity (or the name of a built-in exchange) and get back the 20-byte
//! address the factory would deploy to.
//!
//! ## How the code is organized
//! - `codec/`: the [`Address`] and [`Hash32`] value types, heximal parsing
//!   and EIP-55 checksum encoding
//! - `utils/`: the keccak-256 hash primitive
//! - `core/`: the CREATE2 derivation algorithm and its validation rules
//! - `registry/`: the built-in exchange factory table and high-level
//!   dispatch by exchange identifier
//! - `error/`: the crate-wide error enum
//!
//! ## Quick start
//!
//! ```
//! use dex_pool_address::pool_address_for_exchange_heximal;
//!
//! let pool = pool_address_for_exchange_heximal(
//!     "pancake",
//!     "0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82",
//!     "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c",
//! ).unwrap();
//! assert_eq!(pool, "0xA527a61703D82139F8a06Bc30097cC9CAA2df5A6");
//! ```
//!
//! Every operation is a pure function over immutable inputs; the exchange
//! registry is initialized once and read-only, so all entry points are safe
//! to call concurrently without locks.

pub mod codec;
pub mod core;
pub mod error;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use codec::{Address, Hash32, ADDRESS_LEN, HASH_LEN};
pub use crate::core::{
    calculate_pool_address, calculate_pool_address_from_slices, calculate_pool_address_heximal,
};
pub use error::{PoolAddressError, Result};
pub use registry::{
    lookup_factory_address, pool_address_for_exchange, pool_address_for_exchange_by_name,
    pool_address_for_exchange_heximal, resolve_factory, resolve_factory_by_name, ExchangeId,
    FactoryDescriptor,
};
pub use utils::keccak256_digest;
