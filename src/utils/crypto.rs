use sha3::{Digest, Keccak256};

/// Keccak-256 digest of `data`.
///
/// Pure and stateless; safe to call from any number of threads. This is the
/// original Keccak as used for chain address derivation, not NIST SHA3-256.
pub fn keccak256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
