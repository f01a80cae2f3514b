//! Address and hash codecs
//!
//! Fixed-length binary value types and their heximal string forms. Parsing
//! accepts an optional `0x`/`0X` prefix and any letter casing; encoding
//! produces the EIP-55 mixed-case checksum form for addresses.

pub mod address;
pub mod hash;

pub use address::{Address, ADDRESS_LEN};
pub use hash::{Hash32, HASH_LEN};

/// Strips one leading `0x` or `0X` prefix, if present.
pub(crate) fn strip_heximal_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}
