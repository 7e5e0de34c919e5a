use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

use crate::TreeError;

/// Thread safety marker trait
#[cfg(feature = "multi-thread")]
pub trait ThreadSafe: Send + Sync {}
#[cfg(feature = "multi-thread")]
impl<T: Send + Sync> ThreadSafe for T {}

#[cfg(not(feature = "multi-thread"))]
pub trait ThreadSafe {}
#[cfg(not(feature = "multi-thread"))]
impl<T> ThreadSafe for T {}

/// Arithmetic hash used to hash the nodes in the tree.
///
/// The tree calls it with 2 values for a leaf preimage (`identifier, balance`) and
/// with 4 values for a middle node (`left.hash, left.sum, right.hash, right.sum`).
/// Implementations must be deterministic.
///
/// Any `Fn(&[BigUint]) -> BigUint` is a [`Hasher`].
pub trait Hasher: ThreadSafe {
    fn hash(&self, values: &[BigUint]) -> BigUint;
}

impl<F> Hasher for F
where
    F: Fn(&[BigUint]) -> BigUint + ThreadSafe,
{
    fn hash(&self, values: &[BigUint]) -> BigUint {
        self(values)
    }
}

/// Order of the BN254 scalar field.
const BN254_SCALAR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Default [`Hasher`]: SHA-256 over the length prefixed big-endian encoding of
/// every input, reduced into a prime field.
///
/// Each value is written as its byte length (`u32`, big-endian) followed by its
/// big-endian bytes, so distinct input lists never share a preimage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHasher {
    modulus: BigUint,
}

impl Default for FieldHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldHasher {
    /// Creates a hasher whose output lives in the BN254 scalar field.
    pub fn new() -> Self {
        Self {
            modulus: BigUint::from_bytes_be(&BN254_SCALAR_MODULUS),
        }
    }

    /// Creates a hasher reducing into an arbitrary modulus. Fails with
    /// [`TreeError::InvalidParameter`] if `modulus` is zero.
    pub fn with_modulus(modulus: BigUint) -> Result<Self, TreeError> {
        if modulus.is_zero() {
            return Err(TreeError::InvalidParameter(
                "hasher modulus can't be zero".to_string(),
            ));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

impl Hasher for FieldHasher {
    fn hash(&self, values: &[BigUint]) -> BigUint {
        let mut hasher = Sha256::new();
        for value in values {
            let bytes = value.to_bytes_be();
            hasher.update((bytes.len() as u32).to_be_bytes());
            hasher.update(&bytes);
        }
        BigUint::from_bytes_be(&hasher.finalize()) % &self.modulus
    }
}
