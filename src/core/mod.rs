//! Core pool address derivation
//!
//! The CREATE2 formula and its validation rules, independent of any
//! particular exchange.

pub mod pool;

pub use pool::{
    calculate_pool_address, calculate_pool_address_from_slices, calculate_pool_address_heximal,
};
