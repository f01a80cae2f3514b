//! Utility functions and helpers
//!
//! This module contains the cryptographic hash primitive shared by
//! checksum encoding and pool address derivation.

pub mod crypto;

pub use crypto::keccak256_digest;
