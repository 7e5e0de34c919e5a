//! Identifier codec.
//!
//! Maps a human readable identifier to the integer domain consumed by the
//! [`Hasher`](crate::Hasher): the UTF-8 bytes of the identifier are read as a
//! big-endian integer. The empty identifier maps to `0`, which is the identifier
//! of the padding entry.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::TreeError;

/// Encodes an identifier into its integer representation.
///
/// Leading NUL bytes don't survive the encoding, so `decode` is the inverse of
/// `encode` only for identifiers that don't start with `\0`.
/// [`Entry::new`](crate::Entry::new) rejects the others.
pub fn encode(identifier: &str) -> BigUint {
    BigUint::from_bytes_be(identifier.as_bytes())
}

/// Decodes an integer back into the identifier it was encoded from.
pub fn decode(value: &BigUint) -> Result<String, TreeError> {
    if value.is_zero() {
        return Ok(String::new());
    }
    String::from_utf8(value.to_bytes_be()).map_err(|e| {
        TreeError::InvalidParameter(format!("identifier {value} is not valid UTF-8: {e}"))
    })
}
