use crate::codec::{Address, Hash32, ADDRESS_LEN, HASH_LEN};
use crate::error::{PoolAddressError, Result};
use crate::utils::keccak256_digest;

/// Domain-separation tag mandated by the CREATE2 formula.
const CREATE2_PREFIX: u8 = 0xff;

/// Size of the CREATE2 preimage: prefix + factory + salt + init code hash.
const PREIMAGE_LEN: usize = 1 + ADDRESS_LEN + HASH_LEN + HASH_LEN;

/// Computes the pool address a factory would deploy for a token pair.
///
/// The pair is sorted ascending before hashing, so the result does not
/// depend on argument order: `calculate_pool_address(f, h, a, b)` equals
/// `calculate_pool_address(f, h, b, a)`.
///
/// Validation order is fixed: zero-address check, then identity check.
/// Lengths are already enforced by the [`Address`] and [`Hash32`] types.
pub fn calculate_pool_address(
    factory: &Address,
    init_code_hash: &Hash32,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address> {
    if token_a.is_zero() || token_b.is_zero() {
        return Err(PoolAddressError::ZeroAddress);
    }
    if token_a == token_b {
        return Err(PoolAddressError::IdenticalAddress);
    }

    let (low, high) = sort_address_pair(token_a, token_b);

    // salt = keccak256(low ++ high)
    let mut pair = [0u8; 2 * ADDRESS_LEN];
    pair[..ADDRESS_LEN].copy_from_slice(low.as_bytes());
    pair[ADDRESS_LEN..].copy_from_slice(high.as_bytes());
    let salt = keccak256_digest(&pair);

    // digest = keccak256(0xff ++ factory ++ salt ++ init_code_hash)
    let mut preimage = [0u8; PREIMAGE_LEN];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..1 + ADDRESS_LEN].copy_from_slice(factory.as_bytes());
    preimage[1 + ADDRESS_LEN..1 + ADDRESS_LEN + HASH_LEN].copy_from_slice(&salt);
    preimage[1 + ADDRESS_LEN + HASH_LEN..].copy_from_slice(init_code_hash.as_bytes());
    let digest = keccak256_digest(&preimage);

    // The address is the low-order 20 bytes of the 32-byte digest.
    Address::from_slice(&digest[HASH_LEN - ADDRESS_LEN..])
}

/// Raw-bytes entry point.
///
/// Validates all four inputs uniformly: tokens first, then factory and
/// init code hash, each failing with `InvalidAddress` or `InvalidHash`
/// on a length mismatch.
pub fn calculate_pool_address_from_slices(
    factory: &[u8],
    init_code_hash: &[u8],
    token_a: &[u8],
    token_b: &[u8],
) -> Result<Address> {
    let token_a = Address::from_slice(token_a)?;
    let token_b = Address::from_slice(token_b)?;
    let factory = Address::from_slice(factory)?;
    let init_code_hash = Hash32::from_slice(init_code_hash)?;
    calculate_pool_address(&factory, &init_code_hash, &token_a, &token_b)
}

/// Heximal string entry point.
///
/// Inputs may carry an optional `0x`/`0X` prefix and any letter casing.
/// Token parsing happens before the factory and hash so malformed token
/// strings surface first, and always as `InvalidAddress` rather than the
/// zero/identity failures of well-formed input. The result is encoded in
/// the EIP-55 checksum form.
pub fn calculate_pool_address_heximal(
    factory: &str,
    init_code_hash: &str,
    token_a: &str,
    token_b: &str,
) -> Result<String> {
    let token_a = Address::from_heximal(token_a)?;
    let token_b = Address::from_heximal(token_b)?;
    let factory = Address::from_heximal(factory)?;
    let init_code_hash = Hash32::from_heximal(init_code_hash)?;
    let pool = calculate_pool_address(&factory, &init_code_hash, &token_a, &token_b)?;
    Ok(pool.to_checksum_heximal())
}

/// Orders two addresses ascending by unsigned byte comparison.
fn sort_address_pair<'a>(a: &'a Address, b: &'a Address) -> (&'a Address, &'a Address) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
